//! User domain type.

use chrono::{DateTime, Utc};

use clubhouse_core::{UserId, Username};

/// A board user.
///
/// The password hash deliberately does not appear here; it stays inside
/// the db layer and is only handed to the login path for verification.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's first name.
    pub first_name: String,
    /// User's last name.
    pub last_name: String,
    /// Unique login username.
    pub username: Username,
    /// Whether the user has joined the club.
    pub is_member: bool,
    /// Whether the user may delete messages.
    pub is_admin: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Full display name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
