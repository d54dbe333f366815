//! Chat widget session management.
//!
//! A `ChatSession` holds the conversation log, the draft input, and the
//! visibility flag, and runs the optimistic submit/reply cycle against a
//! `ReplyClient`.

mod manager;
mod submit;
mod types;

#[cfg(test)]
mod tests;

pub use manager::ChatSession;
pub use types::{RequestFailure, SessionOptions};
