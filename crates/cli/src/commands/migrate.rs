//! Database migration command.
//!
//! The board never migrates itself on startup; this command is the one
//! place migrations run.

use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur while running migrations.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Run board database migrations.
///
/// # Errors
///
/// Returns an error if `BOARD_DATABASE_URL` is unset, the connection
/// fails, or a migration fails to apply.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("BOARD_DATABASE_URL")
        .map_err(|_| MigrationError::MissingEnvVar("BOARD_DATABASE_URL"))?;

    tracing::info!("Connecting to board database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Running board migrations...");
    sqlx::migrate!("../board/migrations").run(&pool).await?;

    tracing::info!("Board migrations complete!");
    Ok(())
}
