//! Chat session controller.
//!
//! [`ChatSession`] owns the transcript and the pending flag. A turn is split in
//! two so an event loop can run the network call elsewhere:
//! [`ChatSession::begin_send`] records the user message and hands out a
//! [`PendingExchange`]; [`ChatSession::settle`] records the outcome.
//! [`ChatSession::send_message`] runs both halves against a backend directly.

use tracing::{debug, warn};

use crate::core::backend::{ChatBackend, ExchangeFailed};
use crate::core::constants::{BACKEND_UNAVAILABLE_REPLY, FALLBACK_REPLY};
use crate::core::message::{Message, MessageIdGenerator};
use crate::core::notification::{Notification, NotificationKind};

/// Identifies one exchange so late results from a discarded turn can be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExchangeId(u64);

/// An exchange the caller must run against the backend and then settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExchange {
    pub id: ExchangeId,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetKind {
    NewChat,
    ClearChat,
}

impl ResetKind {
    fn notification(self) -> Notification {
        match self {
            ResetKind::NewChat => NotificationKind::NewChatStarted.into(),
            ResetKind::ClearChat => NotificationKind::ChatCleared.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    in_flight: Option<ExchangeId>,
    ids: MessageIdGenerator,
    next_exchange: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True exactly while one exchange is in flight.
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a turn. Returns `None` without touching state when the trimmed
    /// text is empty or another exchange is still pending.
    pub fn begin_send(&mut self, text: &str) -> Option<PendingExchange> {
        let text = text.trim();
        if text.is_empty() || self.is_pending() {
            return None;
        }

        self.messages.push(Message::user(&mut self.ids, text));

        let id = ExchangeId(self.next_exchange);
        self.next_exchange += 1;
        self.in_flight = Some(id);
        debug!(exchange = id.0, chars = text.chars().count(), "exchange started");

        Some(PendingExchange {
            id,
            message: text.to_string(),
        })
    }

    /// Record the outcome of exchange `id`.
    ///
    /// Results for anything but the in-flight exchange are dropped. On failure
    /// the placeholder reply is appended and the error notification returned.
    pub fn settle(
        &mut self,
        id: ExchangeId,
        outcome: Result<String, ExchangeFailed>,
    ) -> Option<Notification> {
        if self.in_flight != Some(id) {
            debug!(exchange = id.0, "dropping result of superseded exchange");
            return None;
        }

        // Pending clears before the reply lands.
        self.in_flight = None;

        match outcome {
            Ok(reply) => {
                debug!(exchange = id.0, "exchange completed");
                let text = if reply.is_empty() {
                    FALLBACK_REPLY.to_string()
                } else {
                    reply
                };
                self.messages.push(Message::assistant(&mut self.ids, text));
                None
            }
            Err(err) => {
                warn!(exchange = id.0, detail = err.detail(), "exchange failed");
                self.messages
                    .push(Message::assistant(&mut self.ids, BACKEND_UNAVAILABLE_REPLY));
                Some(NotificationKind::BackendUnavailable.into())
            }
        }
    }

    /// Run a whole turn against `backend`.
    pub async fn send_message(
        &mut self,
        backend: &dyn ChatBackend,
        text: &str,
    ) -> Option<Notification> {
        let exchange = self.begin_send(text)?;
        let outcome = backend.submit(&exchange.message).await;
        self.settle(exchange.id, outcome)
    }

    /// Empty the transcript and clear the pending flag. Always notifies.
    pub fn reset(&mut self, kind: ResetKind) -> Notification {
        self.messages.clear();
        self.in_flight = None;
        debug!(?kind, "session reset");
        kind.notification()
    }

    pub fn new_chat(&mut self) -> Notification {
        self.reset(ResetKind::NewChat)
    }

    pub fn clear_chat(&mut self) -> Notification {
        self.reset(ResetKind::ClearChat)
    }
}
