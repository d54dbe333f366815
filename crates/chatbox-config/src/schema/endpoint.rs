//! Reply endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Accepted range for `timeout_secs`.
pub const TIMEOUT_SECS_RANGE: (u32, u32) = (1, 600);
/// Accepted range for `connect_timeout_secs`.
pub const CONNECT_TIMEOUT_SECS_RANGE: (u32, u32) = (1, 120);

/// Where and how the widget reaches the reply-generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Absolute URL the message history is POSTed to.
    pub url: String,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
    /// TCP connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:3000/api/chat".into(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

// Out-of-range values are only warned about at load time, so the
// durations handed to the HTTP client are clamped here.
impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        let (min, max) = TIMEOUT_SECS_RANGE;
        Duration::from_secs(u64::from(self.timeout_secs.clamp(min, max)))
    }

    pub fn connect_timeout(&self) -> Duration {
        let (min, max) = CONNECT_TIMEOUT_SECS_RANGE;
        Duration::from_secs(u64::from(self.connect_timeout_secs.clamp(min, max)))
    }
}
