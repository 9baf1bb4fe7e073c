//! Session-related constants.
//!
//! Only the user id is stored in the session; the full user row is
//! re-read from the database on every request (see `middleware::auth`),
//! so a deleted account is unauthenticated on its next request.

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the logged-in user's id.
    pub const CURRENT_USER_ID: &str = "current_user_id";
}
