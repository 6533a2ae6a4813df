//! Corkboard surface - spatial notes over a REST store.

use dioxus::prelude::*;

mod components;
pub mod drag;
pub mod effects;
pub mod logic;
mod shell;
pub mod state;
pub mod sync;

pub use shell::CorkboardShell;

#[component]
pub fn Corkboard() -> Element {
    rsx! {
        CorkboardShell {}
    }
}
