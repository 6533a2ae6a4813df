use dioxus::prelude::*;

use corkboard_types::{Note, NoteId};

use crate::board::logic::font_scale;

/// The rendered wrapper is shifted left by half the note body's width
/// so a freshly created note centers on the click point.
const NOTE_HALF_WIDTH_PX: f64 = 75.0;

/// Character cap enforced at the input boundary only; a remote write
/// never re-validates it.
const CONTENT_MAX_LEN: &str = "250";

#[component]
pub fn CorkNote(
    note: Note,
    erasing: bool,
    highlighted: bool,
    on_content_input: Callback<(NoteId, String)>,
    on_drag_start: Callback<(NoteId, f64, f64)>,
    on_select: Callback<NoteId>,
    on_delete: Callback<NoteId>,
    on_add_tag: Callback<(NoteId, String)>,
    on_remove_tag: Callback<(NoteId, String)>,
) -> Element {
    let note_id = note.id;
    let mut tag_input = use_signal(String::new);

    let left = note.x - NOTE_HALF_WIDTH_PX;
    let top = note.y;
    let scale = font_scale(&note.content);

    let wrapper_class = if highlighted {
        "corkboard-note-wrapper highlighted"
    } else {
        "corkboard-note-wrapper"
    };

    // Duplicate tag strings are legal, so chips key on position.
    let tag_chips = note.tags.iter().enumerate().map(|(index, tag)| {
        let tag_name = tag.clone();
        rsx! {
            span {
                key: "{index}",
                class: "tag",
                title: "Remove tag",
                onclick: move |e: Event<MouseData>| {
                    e.stop_propagation();
                    on_remove_tag.call((note_id, tag_name.clone()));
                },
                "{tag}"
            }
        }
    });

    rsx! {
        div {
            class: "{wrapper_class}",
            style: "top: {top}px; left: {left}px;",
            onclick: move |e| {
                e.stop_propagation();
                on_select.call(note_id);
            },

            if erasing {
                button {
                    class: "delete-btn",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_delete.call(note_id);
                    },
                    "✖"
                }
            }

            textarea {
                class: "corkboard-note",
                style: "font-size: {scale}rem;",
                maxlength: CONTENT_MAX_LEN,
                value: "{note.content}",
                oninput: move |e| on_content_input.call((note_id, e.value())),
                onclick: move |e| {
                    e.stop_propagation();
                    on_select.call(note_id);
                },
                onmousedown: move |e| {
                    // Erase mode turns the surface into a delete target;
                    // dragging resumes when the mode is left.
                    if erasing {
                        return;
                    }
                    e.stop_propagation();
                    let point = e.data().client_coordinates();
                    on_drag_start.call((note_id, point.x, point.y));
                },
            }

            div {
                class: "note-tags",

                {tag_chips}

                input {
                    class: "tag-input",
                    r#type: "text",
                    placeholder: "+tag",
                    value: "{tag_input}",
                    onclick: move |e| e.stop_propagation(),
                    onmousedown: move |e| e.stop_propagation(),
                    oninput: move |e| tag_input.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            on_add_tag.call((note_id, tag_input()));
                            tag_input.set(String::new());
                        }
                    },
                }
            }
        }
    }
}
