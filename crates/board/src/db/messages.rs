//! Message repository for database operations.

use sqlx::PgPool;

use clubhouse_core::{MessageId, UserId};

use super::RepositoryError;
use crate::models::message::{Message, MessageWithAuthor};

/// Repository for message database operations.
pub struct MessageRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MessageRepository<'a> {
    /// Create a new message repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get every message joined with its author, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_with_authors(&self) -> Result<Vec<MessageWithAuthor>, RepositoryError> {
        let rows = sqlx::query_as::<_, MessageWithAuthor>(
            r#"
            SELECT m.id, m.title, m.message AS body, m."timestamp", m.user_id,
                   u.first_name AS author_first_name,
                   u.last_name AS author_last_name,
                   u.is_member AS author_is_member
            FROM messages m
            JOIN users u ON m.user_id = u.id
            ORDER BY m."timestamp" DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Create a new message owned by `user_id`.
    ///
    /// The timestamp is assigned by the database.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including
    /// a foreign-key violation for a vanished user).
    pub async fn create(
        &self,
        title: &str,
        body: &str,
        user_id: UserId,
    ) -> Result<Message, RepositoryError> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (title, message, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, message AS body, "timestamp", user_id
            "#,
        )
        .bind(title)
        .bind(body)
        .bind(user_id.as_i32())
        .fetch_one(self.pool)
        .await?;

        Ok(message)
    }

    /// Delete a message by ID.
    ///
    /// # Returns
    ///
    /// Returns `true` if the message was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: MessageId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
