//! Terminal rendering of the conversation thread and failure banners.

use std::io::{self, Write};

use chatbox_ai::{Message, Role};

use super::core::ChatboxApp;

fn format_message(message: &Message) -> String {
    let prefix = match message.role {
        Role::Assistant => "bot",
        Role::Human => "you",
    };
    format!("{prefix}> {}", message.content)
}

impl<W: Write> ChatboxApp<W> {
    /// Write log entries not yet shown, then a banner for a new failure.
    /// Nothing is written while the chat is closed.
    pub(super) fn render(&mut self) -> io::Result<()> {
        if !self.session.is_active() {
            return Ok(());
        }

        let messages = self.session.messages();
        if messages.len() < self.rendered {
            self.rendered = 0;
        }
        for message in &messages[self.rendered..] {
            writeln!(self.out, "{}", format_message(message))?;
        }
        self.rendered = messages.len();

        if let Some(failure) = self.session.last_failure() {
            if self.shown_failure != Some(failure.seq) {
                writeln!(self.out, "! reply failed: {}", failure.error)?;
                self.shown_failure = Some(failure.seq);
            }
        }
        Ok(())
    }
}
