//! HTTP reply client configuration.

use std::time::Duration;

use chatbox_config::EndpointConfig;

/// HTTP reply client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    pub url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl HttpClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn from_endpoint(endpoint: &EndpointConfig) -> Self {
        Self {
            url: endpoint.url.clone(),
            timeout: endpoint.timeout(),
            connect_timeout: endpoint.connect_timeout(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}
