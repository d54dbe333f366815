//! Tests for the ChatSession state machine using a scripted reply client.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chatbox_common::NotificationLevel;
use chatbox_config::OverlapPolicy;
use tokio::runtime::Handle;

use super::*;
use crate::{Message, ReplyClient, ReplyError, Role};

const GREETING: &str = "Hello! How can I assist you today?";

/// One canned answer, optionally delayed.
struct Step {
    delay: Duration,
    result: Result<String, ReplyError>,
}

/// Replies from a script in call order and records every snapshot it saw.
#[derive(Default)]
struct ScriptedClient {
    steps: Mutex<VecDeque<Step>>,
    seen: Mutex<Vec<Vec<Message>>>,
    completed: AtomicUsize,
}

impl ScriptedClient {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn reply(self: Arc<Self>, text: &str) -> Arc<Self> {
        self.reply_after(text, Duration::ZERO)
    }

    fn reply_after(self: Arc<Self>, text: &str, delay: Duration) -> Arc<Self> {
        self.push(delay, Ok(text.to_string()))
    }

    fn fail(self: Arc<Self>, error: ReplyError) -> Arc<Self> {
        self.push(Duration::ZERO, Err(error))
    }

    fn push(self: Arc<Self>, delay: Duration, result: Result<String, ReplyError>) -> Arc<Self> {
        self.steps.lock().unwrap().push_back(Step { delay, result });
        self
    }

    fn seen(&self) -> Vec<Vec<Message>> {
        self.seen.lock().unwrap().clone()
    }

    fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReplyClient for ScriptedClient {
    async fn request_reply(&self, messages: &[Message]) -> Result<String, ReplyError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        let step = self
            .steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Step {
                delay: Duration::ZERO,
                result: Err(ReplyError::Network("script exhausted".into())),
            });
        if !step.delay.is_zero() {
            tokio::time::sleep(step.delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
        step.result
    }
}

fn session_with(client: Arc<ScriptedClient>) -> ChatSession {
    ChatSession::new(client, Handle::current())
}

fn send(session: &mut ChatSession, text: &str) -> Option<u64> {
    session.update_draft(text);
    session.submit()
}

#[tokio::test]
async fn new_session_is_inactive_and_empty() {
    let session = session_with(ScriptedClient::new());
    assert!(!session.is_active());
    assert_eq!(session.message_count(), 0);
    assert_eq!(session.draft(), "");
    assert_eq!(session.in_flight(), 0);
}

#[tokio::test]
async fn start_seeds_single_greeting() {
    let mut session = session_with(ScriptedClient::new());
    session.start();

    assert!(session.is_active());
    assert_eq!(session.messages(), &[Message::assistant(GREETING)]);
}

#[tokio::test]
async fn start_uses_configured_greeting() {
    let options = SessionOptions::default().with_greeting("Welcome back.");
    let mut session =
        ChatSession::with_options(ScriptedClient::new(), Handle::current(), options);
    session.start();
    assert_eq!(session.messages(), &[Message::assistant("Welcome back.")]);
}

#[tokio::test]
async fn start_replaces_existing_log() {
    let client = ScriptedClient::new().reply("one");
    let mut session = session_with(client);
    session.start();
    send(&mut session, "first");
    session.settle().await;
    assert_eq!(session.message_count(), 3);

    session.start();
    assert_eq!(session.messages(), &[Message::assistant(GREETING)]);
}

#[tokio::test]
async fn update_draft_accepts_anything() {
    let mut session = session_with(ScriptedClient::new());
    session.update_draft("  ");
    assert_eq!(session.draft(), "  ");
    let long = "x".repeat(100_000);
    session.update_draft(long.clone());
    assert_eq!(session.draft(), long);
}

#[tokio::test]
async fn blank_submit_is_a_no_op() {
    let client = ScriptedClient::new();
    let mut session = session_with(client.clone());
    session.start();

    for blank in ["", "   ", "\n\t "] {
        session.update_draft(blank);
        assert_eq!(session.submit(), None);
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.draft(), blank);
    }

    assert_eq!(session.in_flight(), 0);
    session.settle().await;
    assert!(client.seen().is_empty());
}

#[tokio::test]
async fn submit_appends_human_message_synchronously() {
    let client = ScriptedClient::new().reply("a").reply("b").reply("c");
    let mut session = session_with(client);
    session.start();

    for (i, text) in ["one", "two", "three"].into_iter().enumerate() {
        let seq = send(&mut session, text);
        assert_eq!(seq, Some(i as u64 + 1));
        assert_eq!(session.message_count(), 2 + i);
        assert_eq!(session.messages().last().unwrap(), &Message::human(text));
        assert_eq!(session.draft(), "");
    }
    assert_eq!(session.in_flight(), 3);
}

#[tokio::test]
async fn submit_keeps_surrounding_whitespace() {
    let client = ScriptedClient::new().reply("ok");
    let mut session = session_with(client);
    session.start();
    send(&mut session, "  padded  ");
    assert_eq!(session.messages()[1].content, "  padded  ");
}

#[tokio::test]
async fn successful_round_trip_appends_reply_after_human() {
    let client = ScriptedClient::new().reply("Hi there!");
    let mut session = session_with(client);
    session.start();

    send(&mut session, "hi");
    session.settle().await;

    assert_eq!(
        session.messages(),
        &[
            Message::assistant(GREETING),
            Message::human("hi"),
            Message::assistant("Hi there!"),
        ]
    );
    assert_eq!(session.in_flight(), 0);
    assert!(session.last_failure().is_none());
}

#[tokio::test]
async fn request_carries_snapshot_taken_at_submit() {
    let client = ScriptedClient::new().reply("r1").reply("r2");
    let mut session = session_with(client.clone());
    session.start();

    send(&mut session, "a");
    send(&mut session, "b");
    session.settle().await;

    let mut seen = client.seen();
    seen.sort_by_key(|snapshot| snapshot.len());
    assert_eq!(seen.len(), 2);
    assert_eq!(
        seen[0],
        vec![Message::assistant(GREETING), Message::human("a")]
    );
    assert_eq!(
        seen[1],
        vec![
            Message::assistant(GREETING),
            Message::human("a"),
            Message::human("b"),
        ]
    );
}

#[tokio::test]
async fn failed_round_trip_keeps_only_human_message() {
    let client = ScriptedClient::new().fail(ReplyError::Status {
        status: 500,
        body: "boom".into(),
    });
    let mut session = session_with(client);
    session.start();

    send(&mut session, "help");
    session.settle().await;

    assert_eq!(session.message_count(), 2);
    assert_eq!(session.messages()[1], Message::human("help"));
    assert_eq!(session.draft(), "");

    let failure = session.last_failure().unwrap();
    assert_eq!(failure.seq, 1);
    assert!(matches!(failure.error, ReplyError::Status { status: 500, .. }));

    let banners = session.notifications().visible();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].level, NotificationLevel::Error);
    assert_eq!(banners[0].request_seq, Some(1));
    assert!(banners[0].body.contains("500"));
}

#[tokio::test]
async fn every_failure_kind_is_non_fatal() {
    let client = ScriptedClient::new()
        .fail(ReplyError::Network("connection refused".into()))
        .fail(ReplyError::Timeout)
        .fail(ReplyError::Malformed("missing field `reply`".into()))
        .reply("finally");
    let mut session = session_with(client);
    session.start();

    for text in ["a", "b", "c"] {
        send(&mut session, text);
        session.settle().await;
    }
    assert_eq!(session.message_count(), 4);
    assert!(session
        .messages()
        .iter()
        .skip(1)
        .all(|m| m.role == Role::Human));

    send(&mut session, "d");
    session.settle().await;
    assert_eq!(session.messages().last().unwrap(), &Message::assistant("finally"));
}

#[tokio::test]
async fn poll_is_non_blocking() {
    let client = ScriptedClient::new().reply_after("late", Duration::from_millis(200));
    let mut session = session_with(client);
    session.start();
    send(&mut session, "hi");

    assert_eq!(session.poll(), 0);
    assert_eq!(session.message_count(), 2);

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(session.poll(), 1);
    assert_eq!(session.messages().last().unwrap(), &Message::assistant("late"));
    assert_eq!(session.in_flight(), 0);
}

#[tokio::test]
async fn stale_reply_is_discarded_by_default() {
    let client = ScriptedClient::new()
        .reply_after("reply to first", Duration::from_millis(300))
        .reply("reply to second");
    let mut session = session_with(client);
    assert_eq!(session.overlap_policy(), OverlapPolicy::DiscardStale);
    session.start();

    send(&mut session, "first");
    send(&mut session, "second");
    session.settle().await;

    assert_eq!(
        session.messages(),
        &[
            Message::assistant(GREETING),
            Message::human("first"),
            Message::human("second"),
            Message::assistant("reply to second"),
        ]
    );
}

#[tokio::test]
async fn arrival_order_policy_appends_every_reply() {
    let client = ScriptedClient::new()
        .reply_after("reply to first", Duration::from_millis(300))
        .reply("reply to second");
    let options = SessionOptions::default().with_overlap(OverlapPolicy::ArrivalOrder);
    let mut session = ChatSession::with_options(client, Handle::current(), options);
    session.start();

    send(&mut session, "first");
    send(&mut session, "second");
    session.settle().await;

    let tail: Vec<_> = session.messages()[3..].iter().map(|m| m.content.as_str()).collect();
    assert_eq!(tail, vec!["reply to second", "reply to first"]);
}

#[tokio::test]
async fn in_order_replies_are_all_kept_under_discard_stale() {
    let client = ScriptedClient::new()
        .reply("r1")
        .reply_after("r2", Duration::from_millis(100));
    let mut session = session_with(client);
    session.start();

    send(&mut session, "q1");
    send(&mut session, "q2");
    session.settle().await;

    let replies: Vec<_> = session
        .messages()
        .iter()
        .filter(|m| m.role == Role::Assistant)
        .skip(1)
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(replies, vec!["r1", "r2"]);
}

#[tokio::test]
async fn close_keeps_log_and_draft() {
    let client = ScriptedClient::new().reply("kept");
    let mut session = session_with(client);
    session.start();
    send(&mut session, "hi");
    session.update_draft("unsent");

    session.close();
    assert!(!session.is_active());
    session.settle().await;

    assert_eq!(session.message_count(), 3);
    assert_eq!(session.draft(), "unsent");

    session.reopen();
    assert!(session.is_active());
    assert_eq!(session.message_count(), 3);
}

#[tokio::test]
async fn reopen_without_start_seeds_greeting() {
    let mut session = session_with(ScriptedClient::new());
    session.reopen();
    assert!(session.is_active());
    assert_eq!(session.messages(), &[Message::assistant(GREETING)]);
}

#[tokio::test]
async fn restart_drops_replies_from_previous_conversation() {
    let client = ScriptedClient::new().reply_after("old reply", Duration::from_millis(300));
    let mut session = session_with(client.clone());
    session.start();
    send(&mut session, "before restart");

    session.start();
    session.settle().await;

    assert_eq!(session.messages(), &[Message::assistant(GREETING)]);
    assert_eq!(session.in_flight(), 0);
    assert!(session.last_failure().is_none());
    assert_eq!(client.completed(), 0);
}

#[tokio::test]
async fn dropping_session_cancels_in_flight_requests() {
    let client = ScriptedClient::new().reply_after("never seen", Duration::from_millis(200));
    let mut session = session_with(client.clone());
    session.start();
    send(&mut session, "hi");
    tokio::task::yield_now().await;

    drop(session);
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(client.completed(), 0);
}

#[tokio::test]
async fn restart_clears_previous_failure() {
    let client = ScriptedClient::new().fail(ReplyError::Status {
        status: 500,
        body: "boom".into(),
    });
    let mut session = session_with(client);
    session.start();
    send(&mut session, "help");
    session.settle().await;
    assert!(session.last_failure().is_some());

    session.start();
    assert!(session.last_failure().is_none());
    assert!(session.notifications().is_empty());
    assert_eq!(session.messages(), &[Message::assistant(GREETING)]);
}
