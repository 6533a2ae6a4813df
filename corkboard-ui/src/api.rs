use gloo_net::http::Request;
use std::sync::OnceLock;

use corkboard_types::{NoteCreate, NoteId, NotePatch, NoteRecord};

/// Get the API base URL based on current environment
/// - In development (localhost): the backend dev server on port 8000
/// - In production: use same origin (the backend serves static files)
fn get_api_base() -> String {
    // Get the current hostname from the browser
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://127.0.0.1:8000".to_string()
    } else {
        // In production, use same origin
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Fetch every note on the board. Callers must hold a session token;
/// without one no request is made at all (the call site guards).
pub async fn fetch_notes(token: &str) -> Result<Vec<NoteRecord>, String> {
    let url = format!("{}/corkboard", api_base());

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

/// Create a note; the response carries the server-assigned id.
pub async fn create_note(token: &str, note: &NoteCreate) -> Result<NoteRecord, String> {
    let url = format!("{}/corkboard", api_base());

    let response = Request::post(&url)
        .header("Authorization", &bearer(token))
        .json(note)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

/// Partial update: drag commits send `x`/`y`, content syncs send
/// `content`, tag mutations send the full `tags` array.
pub async fn update_note(token: &str, id: NoteId, patch: &NotePatch) -> Result<(), String> {
    let url = format!("{}/corkboard/{}", api_base(), id);

    let response = Request::put(&url)
        .header("Authorization", &bearer(token))
        .json(patch)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_note(token: &str, id: NoteId) -> Result<(), String> {
    let url = format!("{}/corkboard/{}", api_base(), id);

    let response = Request::delete(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
