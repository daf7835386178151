//! Chat session state: the append-only message log plus the simulated
//! counterpart that answers every send after a fixed delay.
//!
//! Lifecycle per send
//! ------------------
//! `Idle -> AwaitingReply -> Idle`. Each accepted send hands back a
//! [`ReplyTicket`]; whoever owns the timer waits `ticket.delay_ms` and then
//! calls [`ChatSession::deliver_reply`]. Sends are not serialized against
//! replies, so several tickets can be outstanding at once and the session
//! stays in `AwaitingReply` until all of them have landed.
//!
//! Tickets are single-use and bound to the session that issued them.
//! [`ChatSession::close`] drops every outstanding ticket, so a timer that
//! outlives its view can never append to the log.

use std::collections::BTreeSet;

use dioxus::logger::tracing::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::message::{Author, Message};

/// Delay between a send and the simulated reply.
pub const REPLY_DELAY_MS: u64 = 2_000;

pub const CANNED_REPLIES: [&str; 5] = [
    "That's interdimensional-ly interesting!",
    "Wubba lubba dub dub to you too!",
    "Sounds like something from dimension C-137!",
    "Rick would probably burp and say that's stupid, but I think it's cool!",
    "Don't let Rick hear you say that...",
];

/// Seed conversation: (author, minutes before mount, body).
const SEED_MESSAGES: [(Author, i64, &str); 3] = [
    (
        Author::Rick,
        5,
        "Wubba lubba dub dub! Welcome to the interdimensional chat, Morty!",
    ),
    (
        Author::Morty,
        3,
        "Oh geez Rick, I-I hope this chat doesn't break reality or anything...",
    ),
    (
        Author::Summer,
        1,
        "This is actually pretty cool! Way better than those basic social apps.",
    ),
];

/// Tunables for the simulated counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub reply_delay_ms: u64,
    pub reply_candidates: Vec<Author>,
    pub canned_replies: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: REPLY_DELAY_MS,
            reply_candidates: vec![Author::Rick, Author::Morty],
            canned_replies: CANNED_REPLIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Handle for one pending simulated reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTicket {
    pub session_id: Uuid,
    pub seq: u64,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank draft or closed session; nothing changed.
    Ignored,
    Sent { message_id: u64, ticket: ReplyTicket },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingReply { pending: usize },
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    id: Uuid,
    config: ChatConfig,
    messages: Vec<Message>,
    next_id: u64,
    next_seq: u64,
    pending: BTreeSet<u64>,
    closed: bool,
}

impl ChatSession {
    /// Empty log with the given configuration.
    pub fn new(config: ChatConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            messages: Vec::new(),
            next_id: 1,
            next_seq: 0,
            pending: BTreeSet::new(),
            closed: false,
        }
    }

    /// Default configuration with the three sample messages, timestamped
    /// relative to `now`.
    pub fn seeded(now: OffsetDateTime) -> Self {
        Self::seeded_with(ChatConfig::default(), now)
    }

    pub fn seeded_with(config: ChatConfig, now: OffsetDateTime) -> Self {
        let mut session = Self::new(config);
        for (author, minutes_ago, body) in SEED_MESSAGES {
            session.append(author, body, now - Duration::minutes(minutes_ago));
        }
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    pub fn state(&self) -> SessionState {
        if self.closed {
            SessionState::Closed
        } else if self.pending.is_empty() {
            SessionState::Idle
        } else {
            SessionState::AwaitingReply {
                pending: self.pending.len(),
            }
        }
    }

    /// Drives the typing indicator.
    pub fn is_awaiting_reply(&self) -> bool {
        matches!(self.state(), SessionState::AwaitingReply { .. })
    }

    /// Append `text` as the local user and arm a reply. Text that trims to
    /// empty is ignored; accepted text is stored exactly as typed.
    pub fn send(&mut self, text: &str, now: OffsetDateTime) -> SendOutcome {
        if self.closed || text.trim().is_empty() {
            return SendOutcome::Ignored;
        }

        let message_id = self.append(Author::You, text, now);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert(seq);

        debug!(
            session = %self.id,
            message_id,
            seq,
            pending = self.pending.len(),
            "message sent; reply armed"
        );

        SendOutcome::Sent {
            message_id,
            ticket: ReplyTicket {
                session_id: self.id,
                seq,
                delay_ms: self.config.reply_delay_ms,
            },
        }
    }

    /// Redeem a ticket: append one reply with a random candidate author and a
    /// random canned body. Stale, foreign or already-redeemed tickets are
    /// ignored and return `None`.
    pub fn deliver_reply<R: Rng + ?Sized>(
        &mut self,
        ticket: ReplyTicket,
        rng: &mut R,
        now: OffsetDateTime,
    ) -> Option<&Message> {
        if ticket.session_id != self.id || !self.pending.remove(&ticket.seq) {
            debug!(session = %self.id, seq = ticket.seq, "ignoring stale reply ticket");
            return None;
        }

        let author = self.config.reply_candidates.choose(rng).copied();
        let body = self.config.canned_replies.choose(rng).cloned();
        let (Some(author), Some(body)) = (author, body) else {
            warn!(session = %self.id, "reply dropped: no candidates or canned replies configured");
            return None;
        };

        let id = self.append(author, &body, now);
        debug!(session = %self.id, message_id = id, author = author.label(), "reply delivered");
        self.messages.last()
    }

    /// Withdraw a single pending reply. Returns whether it was outstanding.
    pub fn cancel(&mut self, ticket: ReplyTicket) -> bool {
        ticket.session_id == self.id && self.pending.remove(&ticket.seq)
    }

    /// End the session: outstanding replies are dropped and further sends are
    /// ignored. Returns how many replies were dropped.
    pub fn close(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        self.closed = true;
        debug!(session = %self.id, dropped, "chat session closed");
        dropped
    }

    fn append(&mut self, author: Author, body: &str, at: OffsetDateTime) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message::text(id, author, body, at));
        id
    }
}
