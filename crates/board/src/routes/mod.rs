//! HTTP route handlers for the board.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Message list
//! GET  /health                 - Health check
//!
//! # Auth
//! GET  /sign-up                - Signup form
//! POST /sign-up                - Create account
//! GET  /log-in                 - Login form
//! POST /log-in                 - Log in
//! GET  /log-out                - Log out
//!
//! # Messages (requires auth)
//! GET  /new-message            - New message form
//! POST /new-message            - Create message
//! POST /delete-message/{id}    - Delete message (admins only)
//!
//! # Club (requires auth)
//! GET  /join-club              - Join-club form
//! POST /join-club              - Submit the passphrase
//! ```

pub mod auth;
pub mod club;
pub mod home;
pub mod messages;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the board.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/sign-up", get(auth::sign_up_page).post(auth::sign_up))
        .route("/log-in", get(auth::log_in_page).post(auth::log_in))
        .route("/log-out", get(auth::log_out))
        .route(
            "/new-message",
            get(messages::new_message_page).post(messages::new_message),
        )
        .route("/delete-message/{id}", post(messages::delete_message))
        .route("/join-club", get(club::join_club_page).post(club::join_club))
}
