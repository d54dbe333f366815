//! HTTP client struct, request building, and response parsing.

use serde::{Deserialize, Serialize};

use crate::{Message, ReplyError};

use super::config::HttpClientConfig;

/// Longest slice of an error body kept in `ReplyError::Status`.
pub(crate) const ERROR_BODY_LIMIT: usize = 200;

#[derive(Serialize)]
pub(crate) struct ReplyRequest<'a> {
    pub(crate) messages: &'a [Message],
}

#[derive(Deserialize)]
struct ReplyBody {
    reply: String,
}

/// Reply client talking JSON over HTTP.
pub struct HttpReplyClient {
    pub(crate) config: HttpClientConfig,
    pub(crate) url: reqwest::Url,
    pub(crate) http: reqwest::Client,
}

impl HttpReplyClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, ReplyError> {
        let url = reqwest::Url::parse(&config.url)
            .map_err(|e| ReplyError::InvalidEndpoint(format!("{}: {e}", config.url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ReplyError::InvalidEndpoint(format!(
                "{}: unsupported scheme",
                config.url
            )));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ReplyError::Network(e.to_string()))?;

        Ok(Self { config, url, http })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Build the JSON request body for a conversation snapshot.
    pub(crate) fn build_request_body(messages: &[Message]) -> ReplyRequest<'_> {
        ReplyRequest { messages }
    }

    /// Parse a 2xx response body, insisting on a string `reply` field.
    pub(crate) fn parse_response(body: &str) -> Result<String, ReplyError> {
        serde_json::from_str::<ReplyBody>(body)
            .map(|b| b.reply)
            .map_err(|e| ReplyError::Malformed(e.to_string()))
    }

    pub(crate) fn map_transport_error(e: reqwest::Error) -> ReplyError {
        if e.is_timeout() {
            ReplyError::Timeout
        } else {
            ReplyError::Network(e.to_string())
        }
    }
}
