use std::fmt;

use chrono::{DateTime, Local};

/// Identifier of a transcript message.
///
/// Renders as `<unix-millis>-<sequence>`. The sequence is per session and never
/// rewinds, so ids stay unique across resets and compare in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId {
    sequence: u64,
    millis: i64,
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.millis, self.sequence)
    }
}

/// Hands out [`MessageId`]s in creation order.
#[derive(Debug, Default)]
pub struct MessageIdGenerator {
    next: u64,
}

impl MessageIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, at: DateTime<Local>) -> MessageId {
        let id = MessageId {
            sequence: self.next,
            millis: at.timestamp_millis(),
        };
        self.next += 1;
        id
    }
}

/// One entry of the transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    id: MessageId,
    text: String,
    is_user: bool,
    created_at: DateTime<Local>,
}

impl Message {
    pub(crate) fn new(
        ids: &mut MessageIdGenerator,
        text: impl Into<String>,
        is_user: bool,
    ) -> Self {
        let created_at = Local::now();
        Self {
            id: ids.next_id(created_at),
            text: text.into(),
            is_user,
            created_at,
        }
    }

    pub(crate) fn user(ids: &mut MessageIdGenerator, text: impl Into<String>) -> Self {
        Self::new(ids, text, true)
    }

    pub(crate) fn assistant(ids: &mut MessageIdGenerator, text: impl Into<String>) -> Self {
        Self::new(ids, text, false)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_user(&self) -> bool {
        self.is_user
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Wall-clock time shown under the bubble, e.g. `14:05`.
    pub fn display_time(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ids_are_unique_and_ordered_even_within_one_millisecond() {
        let mut ids = MessageIdGenerator::new();
        let at = Local.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let first = ids.next_id(at);
        let second = ids.next_id(at);

        assert_ne!(first, second);
        assert!(first < second);
        assert_eq!(first.to_string(), "1700000000000-0");
        assert_eq!(second.to_string(), "1700000000000-1");
    }

    #[test]
    fn constructors_set_authorship() {
        let mut ids = MessageIdGenerator::new();
        let user = Message::user(&mut ids, "hello");
        let reply = Message::assistant(&mut ids, "hi");

        assert!(user.is_user());
        assert!(!reply.is_user());
        assert_eq!(user.text(), "hello");
        assert!(user.id() < reply.id());
    }

    #[test]
    fn id_carries_creation_millis() {
        let mut ids = MessageIdGenerator::new();
        let message = Message::assistant(&mut ids, "reply");
        let millis = message.created_at().timestamp_millis();

        assert_eq!(message.id().to_string(), format!("{millis}-0"));
    }

    #[test]
    fn display_time_is_hours_and_minutes() {
        let mut ids = MessageIdGenerator::new();
        let message = Message::user(&mut ids, "x");
        let shown = message.display_time();
        assert_eq!(shown.len(), 5);
        assert_eq!(&shown[2..3], ":");
    }
}
