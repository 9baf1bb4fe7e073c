//! Message list page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::db::MessageRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::{MessageWithAuthor, User};
use crate::state::AppState;

/// Home page template: every message with its author, newest first.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub user: Option<User>,
    pub messages: Vec<MessageWithAuthor>,
}

/// Display the message list.
pub async fn index(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
) -> Result<IndexTemplate> {
    let messages = MessageRepository::new(state.pool())
        .list_with_authors()
        .await?;

    Ok(IndexTemplate { user, messages })
}
