use dioxus::prelude::*;

/// Toolbar above the canvas: free-text search plus the erase toggle.
/// The query filters by content or tag containment; it never mutates
/// the collection.
#[component]
pub fn SearchBar(
    query: String,
    on_query_change: Callback<String>,
    erasing: bool,
    on_toggle_erase: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "board-toolbar",

            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search notes...",
                value: "{query}",
                oninput: move |e| on_query_change.call(e.value()),
            }

            button {
                class: if erasing { "erase-toggle active" } else { "erase-toggle" },
                onclick: move |e| {
                    e.stop_propagation();
                    on_toggle_erase.call(());
                },
                if erasing { "Done" } else { "Erase" }
            }
        }
    }
}
