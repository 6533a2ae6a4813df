//! Note drag gesture: live local preview, one position write on release.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use web_sys::MouseEvent;

use corkboard_types::NoteId;

use crate::interop::{canvas_origin, WindowListener};

/// Frozen at mousedown: the canvas origin and the pointer-to-note
/// offset are captured once and never change within one gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    note_id: NoteId,
    origin: (f64, f64),
    offset: (f64, f64),
}

impl DragGesture {
    pub fn begin(
        note_id: NoteId,
        origin: (f64, f64),
        pointer: (f64, f64),
        note_position: (f64, f64),
    ) -> Self {
        let offset = (
            pointer.0 - origin.0 - note_position.0,
            pointer.1 - origin.1 - note_position.1,
        );
        Self {
            note_id,
            origin,
            offset,
        }
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    /// Note position for the current pointer location.
    pub fn position_at(&self, pointer: (f64, f64)) -> (f64, f64) {
        (
            pointer.0 - self.origin.0 - self.offset.0,
            pointer.1 - self.origin.1 - self.offset.1,
        )
    }
}

/// Everything owned by one in-flight gesture. Dropping it detaches the
/// window listeners, so clearing the signal is the single teardown
/// path. A gesture cannot end and leave its listeners behind.
pub struct DragRuntime {
    pub gesture: DragGesture,
    pub last_position: Rc<Cell<(f64, f64)>>,
    _mousemove: WindowListener,
    _mouseup: WindowListener,
}

/// Begin a gesture on a note surface. Returns quietly when the canvas
/// geometry cannot be resolved (board not mounted yet) or a listener
/// cannot be attached; the gesture degrades to a no-op.
pub fn start_drag(
    note_id: NoteId,
    pointer: (f64, f64),
    note_position: (f64, f64),
    on_move: Callback<(NoteId, f64, f64)>,
    on_release: Callback<NoteId>,
    mut active: Signal<Option<DragRuntime>>,
) {
    let Some(origin) = canvas_origin() else {
        log::warn!("canvas geometry unavailable, ignoring drag on note {note_id}");
        return;
    };

    let gesture = DragGesture::begin(note_id, origin, pointer, note_position);
    let last_position = Rc::new(Cell::new(note_position));

    let move_position = last_position.clone();
    let mousemove = WindowListener::attach("mousemove", move |event: MouseEvent| {
        let pointer = (event.client_x() as f64, event.client_y() as f64);
        let (x, y) = gesture.position_at(pointer);
        move_position.set((x, y));
        // Local patch only; the live phase never touches the network.
        on_move.call((note_id, x, y));
    });

    let mouseup = WindowListener::attach("mouseup", move |_event: MouseEvent| {
        on_release.call(note_id);
    });

    let (Some(mousemove), Some(mouseup)) = (mousemove, mouseup) else {
        return;
    };

    active.set(Some(DragRuntime {
        gesture,
        last_position,
        _mousemove: mousemove,
        _mouseup: mouseup,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_captured_once_at_gesture_start() {
        let gesture = DragGesture::begin(1, (100.0, 50.0), (130.0, 80.0), (20.0, 25.0));

        // Moving the pointer by (10, -5) moves the note by (10, -5).
        assert_eq!(gesture.position_at((140.0, 75.0)), (30.0, 20.0));
        // The offset does not drift across moves.
        assert_eq!(gesture.position_at((130.0, 80.0)), (20.0, 25.0));
    }

    #[test]
    fn click_without_movement_commits_the_unchanged_position() {
        let pointer = (200.0, 120.0);
        let gesture = DragGesture::begin(4, (0.0, 0.0), pointer, (120.0, 40.0));
        assert_eq!(gesture.position_at(pointer), (120.0, 40.0));
    }

    #[test]
    fn drag_by_delta_lands_on_the_expected_commit_coordinates() {
        // Note created at canvas point (120, 40), dragged by (10, -5).
        let origin = (8.0, 64.0);
        let grab = (origin.0 + 150.0, origin.1 + 60.0);
        let gesture = DragGesture::begin(9, origin, grab, (120.0, 40.0));

        let mut position = (120.0, 40.0);
        for step in 1..=4 {
            let pointer = (grab.0 + 2.5 * step as f64, grab.1 - 1.25 * step as f64);
            position = gesture.position_at(pointer);
        }

        assert_eq!(position, (130.0, 35.0));
    }
}
