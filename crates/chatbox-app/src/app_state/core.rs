//! ChatboxApp struct definition and constructor.

use std::io::Write;

use chatbox_ai::ChatSession;

/// Top-level application state.
pub struct ChatboxApp<W: Write> {
    pub(super) session: ChatSession,
    pub(super) out: W,
    /// Log entries already written to `out`.
    pub(super) rendered: usize,
    /// Sequence number of the last failure banner shown.
    pub(super) shown_failure: Option<u64>,
    pub(super) input_closed: bool,
    pub(super) should_exit: bool,
}

impl<W: Write> ChatboxApp<W> {
    pub fn new(session: ChatSession, out: W) -> Self {
        Self {
            session,
            out,
            rendered: 0,
            shown_failure: None,
            input_closed: false,
            should_exit: false,
        }
    }
}
