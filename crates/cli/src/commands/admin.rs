//! Admin flag management.

use sqlx::PgPool;
use thiserror::Error;

use clubhouse_core::{Username, UsernameError};

/// Errors that can occur while managing the admin flag.
#[derive(Debug, Error)]
pub enum AdminCommandError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("no user with username {0:?}")]
    NoSuchUser(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Set or clear the admin flag for a user.
///
/// # Errors
///
/// Returns an error if the username is invalid, the environment is not
/// configured, the user does not exist, or the update fails.
pub async fn set_admin(username: &str, is_admin: bool) -> Result<(), AdminCommandError> {
    let username = Username::parse(username)?;

    dotenvy::dotenv().ok();
    let database_url = std::env::var("BOARD_DATABASE_URL")
        .map_err(|_| AdminCommandError::MissingEnvVar("BOARD_DATABASE_URL"))?;

    let pool = PgPool::connect(&database_url).await?;

    let result = sqlx::query("UPDATE users SET is_admin = $1 WHERE username = $2")
        .bind(is_admin)
        .bind(username.as_str())
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AdminCommandError::NoSuchUser(username.as_str().to_owned()));
    }

    tracing::info!(username = %username, is_admin, "admin flag updated");
    Ok(())
}
