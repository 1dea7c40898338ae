//! Chat event loop.
//!
//! Terminal events become [`crate::core::app::AppAction`]s, exchanges run on
//! spawned tasks and report back through a channel, and the screen is redrawn
//! at a bounded frame rate.

mod event_loop;
mod keybindings;
mod lifecycle;

pub use event_loop::run_chat;
pub use keybindings::resolve_key;
