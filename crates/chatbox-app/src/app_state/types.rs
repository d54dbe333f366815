//! Internal types and constants for the app state module.

use std::time::Duration;

/// How often to poll the session for completed replies.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Command {
    /// Open the chat and begin a fresh conversation.
    Start,
    /// Show the chat again, keeping the conversation.
    Open,
    /// Collapse the chat.
    Close,
    Status,
    Quit,
    /// Anything else is message text.
    Say(String),
}

impl Command {
    pub(super) fn parse(line: &str) -> Self {
        match line.trim() {
            "/start" => Command::Start,
            "/open" => Command::Open,
            "/close" => Command::Close,
            "/status" => Command::Status,
            "/quit" | "/exit" => Command::Quit,
            _ => Command::Say(line.to_string()),
        }
    }
}
