//! Chat engine for the Chatbox widget.
//!
//! Provides:
//! - The conversation message model shared with the reply endpoint
//! - `ReplyClient`, the seam to the remote reply-generation service
//! - An HTTP implementation of that seam
//! - `ChatSession`, the widget state machine with optimistic updates

pub mod http;
pub mod session;

use async_trait::async_trait;

pub use http::{HttpClientConfig, HttpReplyClient};
pub use session::{ChatSession, RequestFailure, SessionOptions};

/// Something that turns a conversation history into one reply.
#[async_trait]
pub trait ReplyClient: Send + Sync {
    async fn request_reply(&self, messages: &[Message]) -> Result<String, ReplyError>;
}

/// One entry of the conversation log. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Assistant,
}

/// Outcome of one outbound request.
#[derive(Debug)]
pub enum ReplyOutcome {
    Success(String),
    Failure(ReplyError),
}

impl From<Result<String, ReplyError>> for ReplyOutcome {
    fn from(result: Result<String, ReplyError>) -> Self {
        match result {
            Ok(reply) => ReplyOutcome::Success(reply),
            Err(e) => ReplyOutcome::Failure(e),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("Malformed reply: {0}")]
    Malformed(String),
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::human("hi")).unwrap();
        assert_eq!(json, r#"{"role":"human","content":"hi"}"#);

        let json = serde_json::to_string(&Message::assistant("hello")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hello"}"#);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let parsed = serde_json::from_str::<Message>(r#"{"role":"system","content":"x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn outcome_from_result() {
        let ok: ReplyOutcome = Ok::<_, ReplyError>("Hi there!".to_string()).into();
        assert!(matches!(ok, ReplyOutcome::Success(ref s) if s == "Hi there!"));

        let err: ReplyOutcome = Err::<String, _>(ReplyError::Timeout).into();
        assert!(matches!(err, ReplyOutcome::Failure(ReplyError::Timeout)));
    }

    #[test]
    fn reply_error_display() {
        let err = ReplyError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(ReplyError::Timeout.to_string(), "Timeout");
        assert_eq!(
            ReplyError::Malformed("missing field `reply`".into()).to_string(),
            "Malformed reply: missing field `reply`"
        );
    }
}
