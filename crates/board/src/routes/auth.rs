//! Authentication route handlers.
//!
//! Handles signup, login, and logout. Validation failures answer with
//! plain text; login failures redirect back to the form without saying
//! whether the username or the password was wrong.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::services::auth::{AuthError, AuthService, SignupInput};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LogInForm {
    pub username: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "sign_up.html")]
pub struct SignUpTemplate;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "log_in.html")]
pub struct LogInTemplate {
    pub error: Option<String>,
}

// =============================================================================
// Signup Routes
// =============================================================================

/// Display the signup page.
pub async fn sign_up_page() -> impl IntoResponse {
    SignUpTemplate
}

/// Handle signup form submission.
///
/// On success redirects to the login page; the new account is not
/// logged in automatically.
pub async fn sign_up(State(state): State<AppState>, Form(form): Form<SignUpForm>) -> Response {
    let input = SignupInput {
        first_name: &form.first_name,
        last_name: &form.last_name,
        username: &form.username,
        password: &form.password,
        confirm_password: &form.confirm_password,
    };

    match AuthService::new(state.pool()).register(input).await {
        Ok(user) => {
            tracing::info!(username = %user.username, "account created");
            Redirect::to("/log-in").into_response()
        }
        Err(AuthError::MissingFields) => "All fields are required.".into_response(),
        Err(AuthError::PasswordMismatch) => "Passwords do not match.".into_response(),
        Err(e) => {
            tracing::warn!("Signup failed: {e}");
            "There was an error creating your account.".into_response()
        }
    }
}

// =============================================================================
// Login & Logout Routes
// =============================================================================

/// Display the login page.
pub async fn log_in_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LogInTemplate { error: query.error }
}

/// Handle login form submission.
///
/// Success establishes a session and redirects to the message list.
/// Unknown usernames and wrong passwords both redirect back to the
/// login form.
pub async fn log_in(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LogInForm>,
) -> Response {
    match AuthService::new(state.pool())
        .login(&form.username, &form.password)
        .await
    {
        Ok(user) => {
            if let Err(e) = set_current_user(&session, user.id).await {
                tracing::error!("Failed to set session: {e}");
                return Redirect::to("/log-in?error=session").into_response();
            }
            Redirect::to("/").into_response()
        }
        Err(AuthError::Repository(e)) => AppError::from(e).into_response(),
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            Redirect::to("/log-in?error=credentials").into_response()
        }
    }
}

/// Handle logout.
///
/// Destroys the session entirely; the next request is anonymous.
pub async fn log_out(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {e}");
    }

    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {e}");
    }

    Redirect::to("/").into_response()
}
