use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Fixed set of sender names that can appear in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Author {
    Rick,
    Morty,
    Summer,
    You,
}

impl Author {
    pub fn label(self) -> &'static str {
        match self {
            Author::Rick => "Rick",
            Author::Morty => "Morty",
            Author::Summer => "Summer",
            Author::You => "You",
        }
    }

    pub fn initial(self) -> char {
        match self {
            Author::Rick => 'R',
            Author::Morty => 'M',
            Author::Summer => 'S',
            Author::You => 'Y',
        }
    }

    /// Messages written by the local user render right-aligned.
    pub fn is_self(self) -> bool {
        matches!(self, Author::You)
    }

    pub fn avatar_class(self) -> &'static str {
        match self {
            Author::Rick => "chat-avatar--rick",
            Author::Morty => "chat-avatar--morty",
            Author::Summer => "chat-avatar--summer",
            Author::You => "chat-avatar--you",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Image,
    Audio,
}

/// One immutable entry of the message log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub author: Author,
    pub body: String,
    #[serde(with = "time::serde::rfc3339")]
    pub sent_at: OffsetDateTime,
    #[serde(default)]
    pub kind: MessageKind,
}

impl Message {
    pub fn text(id: u64, author: Author, body: impl Into<String>, sent_at: OffsetDateTime) -> Self {
        Self {
            id,
            author,
            body: body.into(),
            sent_at,
            kind: MessageKind::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn initials_match_labels() {
        for author in [Author::Rick, Author::Morty, Author::Summer, Author::You] {
            assert_eq!(author.label().chars().next(), Some(author.initial()));
        }
    }

    #[test]
    fn only_you_is_self() {
        assert!(Author::You.is_self());
        assert!(!Author::Rick.is_self());
        assert!(!Author::Summer.is_self());
    }

    #[test]
    fn text_constructor_sets_text_kind() {
        let msg = Message::text(7, Author::Morty, "Aw geez", datetime!(2024-01-15 10:00 UTC));
        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.body, "Aw geez");
    }

    #[test]
    fn serializes_kind_in_lowercase() {
        let msg = Message::text(1, Author::Rick, "Burp", datetime!(2024-01-15 10:00 UTC));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["author"], "Rick");
        assert_eq!(json["sent_at"], "2024-01-15T10:00:00Z");
    }
}
