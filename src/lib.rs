//! Dastur is a terminal chat client for a Pakistan Constitution assistant.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the chat session controller, the backend seam, message and
//!   notification types, configuration, and the UI-facing app state.
//! - [`ui`] renders the terminal interface and runs the interactive event loop
//!   that drives user input and display updates.
//! - [`api`] defines the request/response payloads exchanged with the endpoint.
//! - [`logging`] sets up tracing output.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which dispatches into [`ui::chat_loop`] for
//! interactive sessions.

pub mod api;
pub mod cli;
pub mod core;
pub mod logging;
pub mod ui;
pub mod utils;
