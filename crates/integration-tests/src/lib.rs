//! Integration tests for Clubhouse.
//!
//! The tests in `tests/` drive a running board server over HTTP and are
//! `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Apply migrations and start the server
//! cargo run -p clubhouse-cli -- migrate
//! cargo run -p clubhouse-board
//!
//! # Run the ignored integration tests
//! cargo test -p clubhouse-integration-tests -- --ignored
//! ```
//!
//! # Environment
//!
//! - `BOARD_BASE_URL` - server under test (default: `http://localhost:3000`)
//! - `BOARD_DATABASE_URL` - used by tests that flip the admin flag
//! - `CLUB_PASSPHRASE` - required by the join-club tests

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL of the board server under test.
#[must_use]
pub fn board_base_url() -> String {
    std::env::var("BOARD_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// HTTP client with a cookie store and redirects disabled.
///
/// Redirects stay disabled so tests can assert on the `Location` header
/// of each response instead of the page it lands on.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
