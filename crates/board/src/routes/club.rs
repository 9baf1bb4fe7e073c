//! Join-the-club handlers.
//!
//! Submitting the configured passphrase flips `is_member` on the caller.
//! Resubmitting as a member is a no-op.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::db::UserRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireUser;
use crate::state::AppState;

/// Join-club form data.
#[derive(Debug, Deserialize)]
pub struct JoinClubForm {
    pub secret: String,
}

/// Join-club page template.
#[derive(Template, WebTemplate)]
#[template(path = "join_club.html")]
pub struct JoinClubTemplate;

/// Display the join-club page.
pub async fn join_club_page(RequireUser(_user): RequireUser) -> impl IntoResponse {
    JoinClubTemplate
}

/// Handle join-club form submission.
pub async fn join_club(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Form(form): Form<JoinClubForm>,
) -> Result<Response> {
    if form.secret != state.config().club_passphrase.expose_secret() {
        return Ok("Incorrect passcode.".into_response());
    }

    UserRepository::new(state.pool()).set_member(user.id).await?;

    tracing::info!(username = %user.username, "user joined the club");
    Ok("Welcome to the club! You're now a member.".into_response())
}
