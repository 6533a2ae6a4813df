use dioxus::prelude::{ReadableExt, Signal, WritableExt};

use corkboard_types::Note;

use crate::api;
use crate::board::state;
use crate::board::sync::ContentSync;

/// One-shot board load after mount. Without a session token nothing
/// is fetched (an unauthenticated request is never sent) and the board
/// simply renders empty.
pub async fn load_initial_notes(
    token: Option<String>,
    mut loading: Signal<bool>,
    mut error: Signal<Option<String>>,
    mut notes: Signal<Vec<Note>>,
    mut content_sync: Signal<ContentSync>,
) {
    loading.set(true);

    let Some(token) = token else {
        loading.set(false);
        return;
    };

    match api::fetch_notes(&token).await {
        Ok(records) => {
            state::load_notes(&mut notes.write(), records);
            // Seed the debounce baseline so retyping loaded content
            // does not produce a redundant write.
            for note in notes.read().iter() {
                content_sync
                    .write()
                    .record_synced(note.id, note.content.clone());
            }
            error.set(None);
        }
        Err(e) => {
            error.set(Some(e));
        }
    }

    loading.set(false);
}
