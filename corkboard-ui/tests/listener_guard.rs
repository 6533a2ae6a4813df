#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use corkboard_ui::interop::WindowListener;
use wasm_bindgen_test::*;
use web_sys::MouseEvent;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn listener_detaches_on_drop() {
    let hits = Rc::new(Cell::new(0u32));

    let counter = hits.clone();
    let guard = WindowListener::attach("mousemove", move |_event: MouseEvent| {
        counter.set(counter.get() + 1);
    })
    .expect("listener should attach");

    let window = web_sys::window().unwrap();
    let event = MouseEvent::new("mousemove").unwrap();
    window.dispatch_event(&event).unwrap();
    assert_eq!(hits.get(), 1);

    drop(guard);

    let event = MouseEvent::new("mousemove").unwrap();
    window.dispatch_event(&event).unwrap();
    assert_eq!(hits.get(), 1, "dropped guard must not observe events");
}
