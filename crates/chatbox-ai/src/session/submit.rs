//! Optimistic submit and reply application for ChatSession.

use chatbox_common::{new_correlation_id, Notification};
use chatbox_config::OverlapPolicy;
use tracing::{debug, warn};

use crate::{Message, ReplyError, ReplyOutcome};

use super::manager::ChatSession;
use super::types::{ReplyEvent, RequestFailure};

impl ChatSession {
    /// Append the draft as a human message and request a reply for the
    /// whole log.
    ///
    /// A blank draft is ignored. Returns the request's sequence number.
    pub fn submit(&mut self) -> Option<u64> {
        if self.draft.trim().is_empty() {
            return None;
        }

        let content = std::mem::take(&mut self.draft);
        self.log.push(Message::human(content));

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight += 1;

        let snapshot = self.log.clone();
        let correlation_id = new_correlation_id();
        let generation = self.generation;
        let cancel = self.generation_token.clone();
        let client = self.client.clone();
        let events_tx = self.events_tx.clone();

        debug!(
            session = %self.id,
            seq,
            request = %correlation_id,
            messages = snapshot.len(),
            "submitting conversation"
        );

        let task_correlation_id = correlation_id.clone();
        self.runtime.spawn(async move {
            let outcome = tokio::select! {
                _ = cancel.cancelled() => ReplyOutcome::Failure(ReplyError::Cancelled),
                result = client.request_reply(&snapshot) => ReplyOutcome::from(result),
            };
            // The session may already be gone; nothing to report to then.
            let _ = events_tx.send(ReplyEvent {
                generation,
                seq,
                correlation_id: task_correlation_id,
                outcome,
            });
        });

        Some(seq)
    }

    /// Apply every completed request without blocking. Returns how many
    /// completions were drained.
    pub fn poll(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
            drained += 1;
        }
        drained
    }

    /// Wait until no request is outstanding, applying completions as they
    /// arrive.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.events_rx.recv().await {
                Some(event) => self.apply_event(event),
                None => break,
            }
        }
    }

    fn apply_event(&mut self, event: ReplyEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);

        if event.generation != self.generation {
            debug!(
                seq = event.seq,
                request = %event.correlation_id,
                "dropping outcome from a previous conversation"
            );
            return;
        }

        match event.outcome {
            ReplyOutcome::Success(reply) => {
                if self.options.overlap == OverlapPolicy::DiscardStale
                    && event.seq < self.last_applied_seq
                {
                    warn!(
                        seq = event.seq,
                        latest = self.last_applied_seq,
                        request = %event.correlation_id,
                        "discarding stale reply"
                    );
                    return;
                }
                self.last_applied_seq = self.last_applied_seq.max(event.seq);
                self.log.push(Message::assistant(reply));
            }
            ReplyOutcome::Failure(error) => {
                warn!(
                    session = %self.id,
                    seq = event.seq,
                    request = %event.correlation_id,
                    error = %error,
                    "reply request failed"
                );
                self.notifications.push(
                    Notification::error("Reply failed", error.to_string()).for_request(event.seq),
                );
                self.last_failure = Some(RequestFailure {
                    seq: event.seq,
                    correlation_id: event.correlation_id,
                    error,
                });
            }
        }
    }
}
