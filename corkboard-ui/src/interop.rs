use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

/// DOM id of the board canvas. Geometry lookups resolve it lazily; a
/// canvas that is not mounted yet degrades the caller to a no-op.
pub const CANVAS_ELEMENT_ID: &str = "corkboard-canvas";

/// Top-left corner of the canvas in client coordinates.
pub fn canvas_origin() -> Option<(f64, f64)> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(CANVAS_ELEMENT_ID)?;
    let rect = element.get_bounding_client_rect();
    Some((rect.left(), rect.top()))
}

/// A window-level mouse listener that detaches itself when dropped.
///
/// Gesture listeners must never outlive their gesture: a leaked
/// listener intercepts the next gesture's events. Pinning detach to
/// `Drop` makes release unconditional on every exit path.
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl WindowListener {
    pub fn attach(
        event: &'static str,
        handler: impl FnMut(MouseEvent) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
        web_sys::window()?
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, closure })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
