pub mod api;
pub mod board;
pub mod cork_note;
pub mod interop;
pub mod session;

pub use api::*;
pub use board::*;
pub use cork_note::*;
pub use interop::*;
pub use session::*;
