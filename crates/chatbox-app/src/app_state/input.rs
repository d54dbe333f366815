//! Line input: the stdin reader thread and command dispatch.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use super::core::ChatboxApp;
use super::types::Command;

/// Read stdin lines on a background thread. The channel disconnects at EOF.
pub fn spawn_line_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("stdin read failed: {e}");
                    break;
                }
            }
        }
    });
    rx
}

impl<W: Write> ChatboxApp<W> {
    pub(super) fn handle_line(&mut self, line: &str) -> io::Result<()> {
        match Command::parse(line) {
            Command::Start => {
                self.session.start();
                self.rendered = 0;
                self.shown_failure = None;
                self.render()?;
            }
            Command::Open => {
                self.session.reopen();
                self.rendered = 0;
                self.render()?;
            }
            Command::Close => {
                self.session.close();
                writeln!(self.out, "(chat closed, /open to continue)")?;
            }
            Command::Status => self.write_status()?,
            Command::Quit => self.should_exit = true,
            Command::Say(text) => {
                if !self.session.is_active() {
                    writeln!(self.out, "(chat is closed, type /start)")?;
                    return Ok(());
                }
                self.session.update_draft(text);
                if let Some(seq) = self.session.submit() {
                    tracing::debug!(seq, "message submitted");
                }
                self.render()?;
            }
        }
        self.out.flush()
    }

    fn write_status(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "(session {}: {}, {} messages, {} pending)",
            self.session.id(),
            if self.session.is_active() { "open" } else { "closed" },
            self.session.message_count(),
            self.session.in_flight(),
        )
    }
}
