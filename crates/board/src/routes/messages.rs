//! Message creation and deletion handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use clubhouse_core::MessageId;

use crate::db::MessageRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireUser;
use crate::state::AppState;

/// New message form data.
#[derive(Debug, Deserialize)]
pub struct NewMessageForm {
    pub title: String,
    pub message: String,
}

/// New message page template.
#[derive(Template, WebTemplate)]
#[template(path = "new_message.html")]
pub struct NewMessageTemplate;

/// Display the new-message form.
pub async fn new_message_page(RequireUser(_user): RequireUser) -> impl IntoResponse {
    NewMessageTemplate
}

/// Handle new-message form submission.
pub async fn new_message(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Form(form): Form<NewMessageForm>,
) -> Result<Response> {
    if form.title.is_empty() || form.message.is_empty() {
        return Ok("Both fields are required.".into_response());
    }

    MessageRepository::new(state.pool())
        .create(&form.title, &form.message, user.id)
        .await?;

    Ok(Redirect::to("/").into_response())
}

/// Delete a message. Admins only.
///
/// Deleting an id that no longer exists is not an error; the redirect
/// happens either way.
pub async fn delete_message(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i32>,
) -> Result<Response> {
    if !user.is_admin {
        return Ok((StatusCode::FORBIDDEN, "Access denied. Admins only.").into_response());
    }

    MessageRepository::new(state.pool())
        .delete(MessageId::new(id))
        .await?;

    Ok(Redirect::to("/").into_response())
}
