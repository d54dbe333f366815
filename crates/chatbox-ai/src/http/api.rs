//! ReplyClient trait implementation for HttpReplyClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{Message, ReplyClient, ReplyError};

use super::client::{HttpReplyClient, ERROR_BODY_LIMIT};

#[async_trait]
impl ReplyClient for HttpReplyClient {
    async fn request_reply(&self, messages: &[Message]) -> Result<String, ReplyError> {
        let body = Self::build_request_body(messages);

        debug!(url = %self.url, messages = messages.len(), "reply request");

        let response = self
            .http
            .post(self.url.clone())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // Keep the status even if the body cannot be read.
            let text = response.text().await.unwrap_or_default();
            return Err(ReplyError::Status {
                status: status.as_u16(),
                body: truncate_body(&text),
            });
        }

        let text = response.text().await.map_err(Self::map_transport_error)?;
        Self::parse_response(&text)
    }
}

/// First `ERROR_BODY_LIMIT` characters of an error body.
pub(crate) fn truncate_body(text: &str) -> String {
    text.chars().take(ERROR_BODY_LIMIT).collect()
}
