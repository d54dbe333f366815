//! Top-level application state.
//!
//! Owns the `ChatSession` on the main thread and drives it from a line-based
//! terminal loop: stdin lines come in over a channel, completed replies are
//! picked up by polling the session between lines.

mod core;
mod input;
mod polling;
mod render;
mod types;


pub use core::ChatboxApp;
pub use input::spawn_line_reader;
