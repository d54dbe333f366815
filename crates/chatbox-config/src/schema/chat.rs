//! Chat session behavior configuration.

use serde::{Deserialize, Serialize};

/// What to do with a reply that arrives after a newer request was sent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum OverlapPolicy {
    /// Ignore replies older than the latest one already applied.
    #[default]
    DiscardStale,
    /// Append every reply in the order it arrives.
    ArrivalOrder,
}

/// Chat session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Assistant message seeded into the log by `start()`.
    pub greeting: String,
    pub overlap: OverlapPolicy,
    /// Maximum error banners kept at once (valid range: 1-64).
    pub notification_capacity: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello! How can I assist you today?".into(),
            overlap: OverlapPolicy::DiscardStale,
            notification_capacity: 8,
        }
    }
}
