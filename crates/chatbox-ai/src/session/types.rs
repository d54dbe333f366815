//! Session types: options, request outcomes, and failure records.

use chatbox_config::{ChatConfig, OverlapPolicy};

use crate::{ReplyError, ReplyOutcome};

/// Greeting seeded by `start()` unless configured otherwise.
pub const DEFAULT_GREETING: &str = "Hello! How can I assist you today?";

/// Behavior knobs for a `ChatSession`.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub greeting: String,
    pub overlap: OverlapPolicy,
    pub notification_capacity: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            overlap: OverlapPolicy::DiscardStale,
            notification_capacity: 8,
        }
    }
}

impl SessionOptions {
    pub fn from_config(chat: &ChatConfig) -> Self {
        Self {
            greeting: chat.greeting.clone(),
            overlap: chat.overlap,
            notification_capacity: chat.notification_capacity as usize,
        }
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }
}

/// Completion of one outbound request, sent back to the owning session.
#[derive(Debug)]
pub(crate) struct ReplyEvent {
    /// Conversation generation the request was issued in.
    pub(crate) generation: u64,
    /// Monotonic request sequence number (starts at 1).
    pub(crate) seq: u64,
    pub(crate) correlation_id: String,
    pub(crate) outcome: ReplyOutcome,
}

/// A failed round trip, kept for the renderer and diagnostics.
#[derive(Debug)]
pub struct RequestFailure {
    pub seq: u64,
    pub correlation_id: String,
    pub error: ReplyError,
}
