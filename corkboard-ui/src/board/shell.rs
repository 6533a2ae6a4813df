use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use corkboard_types::{Note, NoteCreate, NoteId, NotePatch};

use crate::api;
use crate::board::components::{ErrorState, LoadingState, SearchBar};
use crate::board::drag::{start_drag, DragRuntime};
use crate::board::effects;
use crate::board::logic::{filter_notes, shares_highlighted_tag};
use crate::board::state::{self, NoteFields};
use crate::board::sync::{ContentSync, CONTENT_DEBOUNCE_MS};
use crate::cork_note::CorkNote;
use crate::interop::{canvas_origin, CANVAS_ELEMENT_ID};
use crate::session::stored_token;

#[component]
pub fn CorkboardShell() -> Element {
    let mut notes = use_signal(Vec::<Note>::new);
    let loading = use_signal(|| true);
    let error = use_signal(|| None::<String>);
    // Read once at mount; auth itself lives outside this client.
    let token = use_signal(stored_token);
    let mut query = use_signal(String::new);
    let mut highlighted = use_signal(Vec::<String>::new);
    let mut erasing = use_signal(|| false);
    let mut content_sync = use_signal(ContentSync::default);
    let mut active_drag = use_signal(|| None::<DragRuntime>);

    // Load the board once after mount.
    use_effect(move || {
        spawn(async move {
            effects::load_initial_notes(token(), loading, error, notes, content_sync).await;
        });
    });

    // Live phase of a drag: patch the collection synchronously so the
    // note follows the pointer. Nothing goes on the wire here.
    let on_drag_move = use_callback(move |(id, x, y): (NoteId, f64, f64)| {
        state::patch_note(&mut notes.write(), id, NoteFields::position(x, y));
    });

    // Commit phase: detach the listeners, then exactly one position
    // write with the final coordinates. A failed write is logged and
    // the local position stands.
    let on_drag_release = use_callback(move |_id: NoteId| {
        // Teardown is deferred one tick: the mouseup guard must not be
        // dropped while its own handler is still on the stack.
        spawn(async move {
            let Some(runtime) = active_drag.write().take() else {
                return;
            };
            let id = runtime.gesture.note_id();
            let (x, y) = runtime.last_position.get();
            drop(runtime);

            let Some(token) = token() else {
                return;
            };
            if let Err(e) = api::update_note(&token, id, &NotePatch::position(x, y)).await {
                dioxus_logger::tracing::error!("Failed to update note position: {}", e);
            }
        });
    });

    let on_drag_start = use_callback(move |(id, pointer_x, pointer_y): (NoteId, f64, f64)| {
        let position = notes
            .read()
            .iter()
            .find(|n| n.id == id)
            .map(|n| (n.x, n.y));
        let Some(position) = position else {
            return;
        };
        start_drag(
            id,
            (pointer_x, pointer_y),
            position,
            on_drag_move,
            on_drag_release,
            active_drag,
        );
    });

    // Optimistic content edit plus debounce arm: the collection updates
    // on every keystroke, the network sees only the value present at
    // the end of a quiet window.
    let on_content_input = use_callback(move |(id, value): (NoteId, String)| {
        state::patch_note(&mut notes.write(), id, NoteFields::content(value.clone()));
        let epoch = content_sync.write().note_edited(id, value);

        spawn(async move {
            TimeoutFuture::new(CONTENT_DEBOUNCE_MS).await;
            let Some(content) = content_sync.write().take_due(id, epoch) else {
                return;
            };
            let Some(token) = token() else {
                return;
            };
            if let Err(e) = api::update_note(&token, id, &NotePatch::content(content)).await {
                dioxus_logger::tracing::error!("Failed to update content: {}", e);
            }
        });
    });

    // Clicking a tagged note highlights every note sharing one of its
    // tags; untagged notes leave the set alone.
    let on_select = use_callback(move |id: NoteId| {
        let tags = notes
            .read()
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.tags.clone())
            .unwrap_or_default();
        if !tags.is_empty() {
            highlighted.set(tags);
        }
    });

    // Delete is a blocking round trip: the note leaves the board only
    // after the server acknowledges.
    let on_delete = use_callback(move |id: NoteId| {
        let Some(token) = token() else {
            return;
        };
        spawn(async move {
            match api::delete_note(&token, id).await {
                Ok(()) => {
                    state::remove_note(&mut notes.write(), id);
                    content_sync.write().forget(id);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to delete note: {}", e);
                }
            }
        });
    });

    let on_add_tag = use_callback(move |(id, tag): (NoteId, String)| {
        if tag.trim().is_empty() {
            // Rejected locally; no call is issued.
            return;
        }
        let Some(tags) = state::tags_with_added(&notes.read(), id, &tag) else {
            return;
        };
        state::patch_note(&mut notes.write(), id, NoteFields::tags(tags.clone()));

        let Some(token) = token() else {
            return;
        };
        spawn(async move {
            if let Err(e) = api::update_note(&token, id, &NotePatch::tags(tags)).await {
                dioxus_logger::tracing::error!("Failed to update tags: {}", e);
            }
        });
    });

    let on_remove_tag = use_callback(move |(id, tag): (NoteId, String)| {
        // Removing an absent tag changes nothing and sends nothing.
        let Some(tags) = state::tags_with_removed(&notes.read(), id, &tag) else {
            return;
        };
        state::patch_note(&mut notes.write(), id, NoteFields::tags(tags.clone()));

        let Some(token) = token() else {
            return;
        };
        spawn(async move {
            if let Err(e) = api::update_note(&token, id, &NotePatch::tags(tags)).await {
                dioxus_logger::tracing::error!("Failed to update tags: {}", e);
            }
        });
    });

    // Empty-canvas click clears tag highlighting and, outside erase
    // mode, plants a new note at the click point. The note appears only
    // once the create response assigns its id.
    let on_canvas_click = use_callback(move |e: Event<MouseData>| {
        highlighted.set(Vec::new());

        if erasing() {
            return;
        }
        let Some(origin) = canvas_origin() else {
            return;
        };
        let point = e.data().client_coordinates();
        let x = point.x - origin.0;
        let y = point.y - origin.1;

        let Some(token) = token() else {
            return;
        };
        spawn(async move {
            let body = NoteCreate {
                content: String::new(),
                x,
                y,
                tags: Vec::new(),
            };
            match api::create_note(&token, &body).await {
                Ok(record) => {
                    let note = record.into_note();
                    content_sync
                        .write()
                        .record_synced(note.id, note.content.clone());
                    state::insert_note(&mut notes.write(), note);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to create note: {}", e);
                }
            }
        });
    });

    let visible: Vec<Note> = {
        let current_notes = notes.read();
        filter_notes(&current_notes, &query.read())
            .into_iter()
            .cloned()
            .collect()
    };
    let highlighted_tags = highlighted.read().clone();

    rsx! {
        style { {BOARD_STYLES} }

        div {
            class: "corkboard-shell",

            SearchBar {
                query: query(),
                on_query_change: move |value: String| query.set(value),
                erasing: erasing(),
                on_toggle_erase: move |_| erasing.set(!erasing()),
            }

            if loading() {
                LoadingState {}
            } else if let Some(err) = error.read().as_ref() {
                ErrorState { error: err.clone() }
            } else {
                div {
                    id: CANVAS_ELEMENT_ID,
                    class: if erasing() { "corkboard-canvas erasing" } else { "corkboard-canvas" },
                    onclick: move |e| on_canvas_click.call(e),

                    for note in visible {
                        CorkNote {
                            key: "{note.id}",
                            highlighted: shares_highlighted_tag(&note, &highlighted_tags),
                            erasing: erasing(),
                            note,
                            on_content_input,
                            on_drag_start,
                            on_select,
                            on_delete,
                            on_add_tag,
                            on_remove_tag,
                        }
                    }
                }
            }
        }
    }
}

const BOARD_STYLES: &str = r#"
* {
    box-sizing: border-box;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary, #1c1917);
    color: var(--text-primary, #f8fafc);
}

.corkboard-shell {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    overflow: hidden;
}

.board-toolbar {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1rem;
    background: var(--toolbar-bg, #292524);
    border-bottom: 1px solid var(--border-color, #44403c);
}

.search-input {
    flex: 1;
    padding: 0.5rem 1rem;
    background: var(--input-bg, #1c1917);
    color: var(--text-primary, #f8fafc);
    border: 1px solid var(--border-color, #44403c);
    border-radius: 8px;
    font-size: 0.875rem;
    outline: none;
    min-width: 0;
}

.erase-toggle {
    padding: 0.5rem 1rem;
    background: var(--window-bg, #292524);
    color: var(--text-secondary, #a8a29e);
    border: 1px solid var(--border-color, #44403c);
    border-radius: 8px;
    cursor: pointer;
}

.erase-toggle.active {
    background: var(--danger-bg, #ef4444);
    color: white;
}

.corkboard-canvas {
    flex: 1;
    position: relative;
    overflow: hidden;
    background: var(--board-bg, #b08d57);
    cursor: crosshair;
}

.corkboard-canvas.erasing {
    cursor: not-allowed;
}

.corkboard-note-wrapper {
    position: absolute;
    width: 150px;
}

.corkboard-note-wrapper.highlighted .corkboard-note {
    outline: 3px solid var(--accent-bg, #3b82f6);
}

.corkboard-note {
    width: 150px;
    height: 150px;
    padding: 0.5rem;
    background: var(--note-bg, #fef08a);
    color: #1c1917;
    border: none;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.4);
    resize: none;
    cursor: grab;
    overflow: hidden;
}

.delete-btn {
    position: absolute;
    top: -10px;
    right: -10px;
    z-index: 2;
    width: 24px;
    height: 24px;
    background: var(--danger-bg, #ef4444);
    color: white;
    border: none;
    border-radius: 999px;
    cursor: pointer;
    line-height: 1;
}

.note-tags {
    display: flex;
    flex-wrap: wrap;
    gap: 0.25rem;
    margin-top: 0.25rem;
}

.tag {
    padding: 0.125rem 0.5rem;
    background: rgba(28, 25, 23, 0.8);
    color: #fef08a;
    border-radius: 999px;
    font-size: 0.7rem;
    cursor: pointer;
    user-select: none;
}

.tag-input {
    width: 4.5rem;
    padding: 0.125rem 0.375rem;
    background: rgba(28, 25, 23, 0.35);
    color: #1c1917;
    border: none;
    border-radius: 999px;
    font-size: 0.7rem;
    outline: none;
}
"#;
