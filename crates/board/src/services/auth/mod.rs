//! Authentication service.
//!
//! Validates signup input, hashes credentials, and checks logins.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use clubhouse_core::Username;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::User;

/// Raw signup form input, validated by [`AuthService::register`].
#[derive(Debug)]
pub struct SignupInput<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Authentication service.
///
/// Handles user registration and login.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// New accounts start without membership or admin rights.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is empty.
    /// Returns `AuthError::PasswordMismatch` if the confirmation differs.
    /// Returns `AuthError::InvalidUsername` if the username fails validation.
    /// Returns `AuthError::UsernameTaken` if the username is already registered.
    pub async fn register(&self, input: SignupInput<'_>) -> Result<User, AuthError> {
        validate_signup(&input)?;

        let username = Username::parse(input.username)?;
        let password_hash = hash_password(input.password)?;

        let user = self
            .users
            .create(input.first_name, input.last_name, &username, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UsernameTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Login with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if no such username exists, and
    /// `AuthError::InvalidCredentials` if the password is wrong. Callers
    /// are expected to surface both identically.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = Username::parse(username).map_err(|_| AuthError::UserNotFound)?;

        let (user, password_hash) = self
            .users
            .get_by_username(&username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        verify_password(password, &password_hash)?;

        Ok(user)
    }
}

/// Check that every signup field is present and the passwords agree.
fn validate_signup(input: &SignupInput<'_>) -> Result<(), AuthError> {
    let fields = [
        input.first_name,
        input.last_name,
        input.username,
        input.password,
        input.confirm_password,
    ];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(AuthError::MissingFields);
    }

    if input.password != input.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(
        first_name: &'a str,
        last_name: &'a str,
        username: &'a str,
        password: &'a str,
        confirm_password: &'a str,
    ) -> SignupInput<'a> {
        SignupInput {
            first_name,
            last_name,
            username,
            password,
            confirm_password,
        }
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("pw123").expect("hashing should succeed");
        assert!(verify_password("pw123", &hash).is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = hash_password("pw123").expect("hashing should succeed");
        assert!(matches!(
            verify_password("pw124", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("pw123", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("pw123").expect("hashing should succeed");
        let second = hash_password("pw123").expect("hashing should succeed");
        assert_ne!(first, second);
    }

    #[test]
    fn test_validate_signup_accepts_complete_input() {
        assert!(validate_signup(&input("Alice", "Smith", "alice", "pw123", "pw123")).is_ok());
    }

    #[test]
    fn test_validate_signup_rejects_missing_fields() {
        assert!(matches!(
            validate_signup(&input("", "Smith", "alice", "pw123", "pw123")),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            validate_signup(&input("Alice", "Smith", "alice", "pw123", "")),
            Err(AuthError::MissingFields)
        ));
    }

    #[test]
    fn test_validate_signup_rejects_password_mismatch() {
        assert!(matches!(
            validate_signup(&input("Alice", "Smith", "alice", "pw123", "pw124")),
            Err(AuthError::PasswordMismatch)
        ));
    }
}
