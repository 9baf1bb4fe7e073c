//! Message domain types.

use chrono::{DateTime, Utc};

use clubhouse_core::{MessageId, UserId};

/// A message posted to the board.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Message {
    /// Unique message ID.
    pub id: MessageId,
    /// Message title.
    pub title: String,
    /// Message body text.
    pub body: String,
    /// When the message was posted.
    pub timestamp: DateTime<Utc>,
    /// User who posted the message.
    pub user_id: UserId,
}

/// A message joined with its author, as shown on the board.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MessageWithAuthor {
    /// Unique message ID.
    pub id: MessageId,
    /// Message title.
    pub title: String,
    /// Message body text.
    pub body: String,
    /// When the message was posted.
    pub timestamp: DateTime<Utc>,
    /// User who posted the message.
    pub user_id: UserId,
    /// Author's first name.
    pub author_first_name: String,
    /// Author's last name.
    pub author_last_name: String,
    /// Whether the author is a club member.
    pub author_is_member: bool,
}

impl MessageWithAuthor {
    /// Author display name.
    #[must_use]
    pub fn author_name(&self) -> String {
        format!("{} {}", self.author_first_name, self.author_last_name)
    }

    /// Timestamp formatted for the list view.
    #[must_use]
    pub fn posted_at(&self) -> String {
        self.timestamp.format("%B %-d, %Y at %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> MessageWithAuthor {
        MessageWithAuthor {
            id: MessageId::new(1),
            title: "Hi".to_string(),
            body: "Hello".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 3, 9, 14, 30, 0).single().expect("valid"),
            user_id: UserId::new(1),
            author_first_name: "Alice".to_string(),
            author_last_name: "Smith".to_string(),
            author_is_member: false,
        }
    }

    #[test]
    fn test_author_name() {
        assert_eq!(sample().author_name(), "Alice Smith");
    }

    #[test]
    fn test_posted_at_format() {
        assert_eq!(sample().posted_at(), "March 9, 2025 at 14:30");
    }
}
