//! Authentication extractors.
//!
//! The session stores only a user id. These extractors resolve that id
//! against the `users` table on every request, producing a typed
//! identity for handlers: [`OptionalUser`] for pages anyone may view,
//! [`RequireUser`] for gated routes.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use clubhouse_core::UserId;

use crate::db::UserRepository;
use crate::models::{User, session_keys};
use crate::state::AppState;

/// Extractor that requires an authenticated user.
///
/// If nobody is logged in, returns a redirect to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireUser(user): RequireUser,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.username)
/// }
/// ```
pub struct RequireUser(pub User);

/// Error returned when identity resolution fails or nobody is logged in.
pub enum AuthRejection {
    /// Redirect to the login page.
    RedirectToLogin,
    /// The identity lookup itself failed.
    Internal,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/log-in").into_response(),
            Self::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = resolve_user(parts, state).await?;
        user.map(Self).ok_or(AuthRejection::RedirectToLogin)
    }
}

/// Extractor that optionally resolves the current user.
///
/// Unlike `RequireUser`, this does not reject the request if nobody is
/// logged in.
pub struct OptionalUser(pub Option<User>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(resolve_user(parts, state).await?))
    }
}

/// Resolve the session's stored user id to a full user row.
///
/// A request with no session, no stored id, or an id whose user row no
/// longer exists is anonymous. A database failure is not.
async fn resolve_user(parts: &mut Parts, state: &AppState) -> Result<Option<User>, AuthRejection> {
    // Get the session from extensions (set by SessionManagerLayer)
    let Some(session) = parts.extensions.get::<Session>() else {
        return Ok(None);
    };

    let user_id: Option<UserId> = session
        .get(session_keys::CURRENT_USER_ID)
        .await
        .ok()
        .flatten();

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    UserRepository::new(state.pool())
        .get_by_id(user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to resolve session user");
            AuthRejection::Internal
        })
}

/// Helper to record the logged-in user in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user_id: UserId,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER_ID, user_id).await
}

/// Helper to clear the logged-in user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<UserId>(session_keys::CURRENT_USER_ID)
        .await?;
    Ok(())
}
