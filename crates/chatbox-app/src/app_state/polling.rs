//! Main loop: wait for input, poll the session, render.

use std::io::{self, Write};
use std::sync::mpsc::{Receiver, RecvTimeoutError};

use super::core::ChatboxApp;
use super::types::POLL_INTERVAL;

impl<W: Write> ChatboxApp<W> {
    /// Run until `/quit`, or until stdin closes and no reply is pending.
    pub fn run(&mut self, start_open: bool, lines: Receiver<String>) -> io::Result<()> {
        if start_open {
            self.handle_line("/start")?;
        }

        while !self.should_exit {
            if self.input_closed {
                std::thread::sleep(POLL_INTERVAL);
            } else {
                match lines.recv_timeout(POLL_INTERVAL) {
                    Ok(line) => self.handle_line(&line)?,
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => {
                        tracing::debug!("input closed");
                        self.input_closed = true;
                    }
                }
            }

            self.poll_session()?;

            if self.input_closed && self.session.in_flight() == 0 {
                break;
            }
        }
        Ok(())
    }

    /// Apply completed replies and render whatever changed.
    pub(super) fn poll_session(&mut self) -> io::Result<()> {
        if self.session.poll() > 0 {
            self.render()?;
            self.out.flush()?;
        }
        Ok(())
    }
}
