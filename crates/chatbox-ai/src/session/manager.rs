//! ChatSession struct, lifecycle transitions, and accessors.

use std::sync::Arc;

use chatbox_common::{NotificationQueue, SessionId};
use chatbox_config::OverlapPolicy;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{Message, ReplyClient};

use super::types::{ReplyEvent, RequestFailure, SessionOptions};

/// State of one open chat widget.
///
/// All mutation happens through `&mut self` on the owning (UI) thread.
/// Outbound requests run on the supplied runtime and report back over a
/// channel that `poll()` / `settle()` drain.
pub struct ChatSession {
    pub(super) id: SessionId,
    /// Whether the conversation UI is shown.
    pub(super) active: bool,
    /// Text being composed, cleared on submit.
    pub(super) draft: String,
    /// Append-only conversation log, oldest first.
    pub(super) log: Vec<Message>,
    pub(super) options: SessionOptions,
    pub(super) client: Arc<dyn ReplyClient>,
    pub(super) runtime: Handle,
    pub(super) events_tx: mpsc::UnboundedSender<ReplyEvent>,
    pub(super) events_rx: mpsc::UnboundedReceiver<ReplyEvent>,
    /// Cancelled on drop; parent of every generation token.
    pub(super) shutdown: CancellationToken,
    /// Cancelled when `start()` begins a new conversation.
    pub(super) generation_token: CancellationToken,
    pub(super) generation: u64,
    /// Sequence number handed to the next request.
    pub(super) next_seq: u64,
    /// Highest sequence number whose reply was appended (0 = none).
    pub(super) last_applied_seq: u64,
    pub(super) in_flight: usize,
    pub(super) last_failure: Option<RequestFailure>,
    pub(super) notifications: NotificationQueue,
}

impl ChatSession {
    pub fn new(client: Arc<dyn ReplyClient>, runtime: Handle) -> Self {
        Self::with_options(client, runtime, SessionOptions::default())
    }

    pub fn with_options(
        client: Arc<dyn ReplyClient>,
        runtime: Handle,
        options: SessionOptions,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        let generation_token = shutdown.child_token();
        let notifications = NotificationQueue::new(options.notification_capacity);

        Self {
            id: SessionId::new(),
            active: false,
            draft: String::new(),
            log: Vec::new(),
            options,
            client,
            runtime,
            events_tx,
            events_rx,
            shutdown,
            generation_token,
            generation: 0,
            next_seq: 1,
            last_applied_seq: 0,
            in_flight: 0,
            last_failure: None,
            notifications,
        }
    }

    /// Show the widget and begin a fresh conversation seeded with the greeting.
    ///
    /// Requests still in flight from before the call are cancelled and their
    /// outcomes ignored. Failure state from the old conversation is cleared.
    pub fn start(&mut self) {
        self.generation_token.cancel();
        self.generation_token = self.shutdown.child_token();
        self.generation += 1;
        self.last_applied_seq = 0;
        self.last_failure = None;
        self.notifications.clear();

        self.active = true;
        self.log = vec![Message::assistant(self.options.greeting.clone())];

        info!(session = %self.id, generation = self.generation, "chat session started");
    }

    /// Show the widget again without touching the conversation.
    pub fn reopen(&mut self) {
        if self.log.is_empty() {
            self.start();
            return;
        }
        self.active = true;
        debug!(session = %self.id, "chat session reopened");
    }

    /// Collapse the widget. Log and draft are kept.
    pub fn close(&mut self) {
        self.active = false;
        debug!(session = %self.id, in_flight = self.in_flight, "chat session closed");
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    // -- Getters --

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn messages(&self) -> &[Message] {
        &self.log
    }

    pub fn message_count(&self) -> usize {
        self.log.len()
    }

    /// Requests issued but not yet drained by `poll()` / `settle()`.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn overlap_policy(&self) -> OverlapPolicy {
        self.options.overlap
    }

    pub fn last_failure(&self) -> Option<&RequestFailure> {
        self.last_failure.as_ref()
    }

    /// Error banners for the renderer.
    pub fn notifications(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        if self.in_flight > 0 {
            debug!(session = %self.id, in_flight = self.in_flight, "cancelling in-flight requests");
        }
        self.shutdown.cancel();
    }
}
