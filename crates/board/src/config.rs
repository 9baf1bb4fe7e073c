//! Board configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BOARD_DATABASE_URL` - `PostgreSQL` connection string
//! - `BOARD_SESSION_SECRET` - Session secret (min 32 chars, high entropy)
//! - `CLUB_PASSPHRASE` - Shared passphrase that unlocks club membership
//!
//! ## Optional
//! - `BOARD_HOST` - Bind address (default: 127.0.0.1)
//! - `BOARD_PORT` - Listen port (default: 3000)
//! - `BOARD_BASE_URL` - Public URL (default: `http://localhost:3000`);
//!   an https URL enables the secure flag on the session cookie

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_SESSION_SECRET_LENGTH: usize = 32;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Board application configuration.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the board
    pub base_url: String,
    /// Session secret
    pub session_secret: SecretString,
    /// Shared passphrase that flips `is_member` on submission
    pub club_passphrase: SecretString,
}

impl BoardConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a required variable is missing, fails to
    /// parse, or a secret fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_required_secret("BOARD_DATABASE_URL")?;
        let host = get_env_or_default("BOARD_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BOARD_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("BOARD_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BOARD_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("BOARD_BASE_URL", "http://localhost:3000");

        let session_secret = get_required_secret("BOARD_SESSION_SECRET")?;
        validate_session_secret(&session_secret, "BOARD_SESSION_SECRET")?;

        // The club passphrase is a human-chosen phrase, not a generated
        // secret; only presence is enforced.
        let club_passphrase = get_required_secret("CLUB_PASSPHRASE")?;

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            session_secret,
            club_passphrase,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable, or a default if it is unset.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))?;
    if value.is_empty() {
        return Err(ConfigError::MissingEnvVar(key.to_string()));
    }
    Ok(SecretString::from(value))
}

/// Validate that a session secret is long enough and not a placeholder.
fn validate_session_secret(secret: &SecretString, key: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();

    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            key.to_string(),
            format!("must be at least {MIN_SESSION_SECRET_LENGTH} characters"),
        ));
    }

    let lowered = value.to_lowercase();
    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lowered.contains(**p)) {
        return Err(ConfigError::InsecureSecret(
            key.to_string(),
            format!("looks like a placeholder (contains {pattern:?})"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[test]
    fn test_session_secret_rejects_short_values() {
        let result = validate_session_secret(&secret("short"), "TEST_SECRET");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_session_secret_rejects_placeholders() {
        let result = validate_session_secret(
            &secret("changeme-changeme-changeme-changeme"),
            "TEST_SECRET",
        );
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_session_secret_accepts_long_random_values() {
        let result = validate_session_secret(
            &secret("kR9mPq2vXw8nLt4bJh6cZf1dYg3sWa5u"),
            "TEST_SECRET",
        );
        assert!(result.is_ok());
    }
}
