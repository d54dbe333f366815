//! HTTP reply client.
//!
//! Implements the `ReplyClient` trait by POSTing the conversation as
//! `{"messages": [...]}` and reading `{"reply": "..."}` back.

mod api;
mod client;
mod config;


pub use client::HttpReplyClient;
pub use config::HttpClientConfig;
