//! Session token access.
//!
//! Login and registration live outside this client; the token is
//! whatever the auth flow left in localStorage. It is read once at
//! board mount and treated as read-only afterwards. A missing token
//! suppresses every remote call at its call site; an unauthenticated
//! request is never sent.

const TOKEN_STORAGE_KEY: &str = "access_token";

pub fn stored_token() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}
