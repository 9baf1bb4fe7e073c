//! Domain models for the board.

pub mod message;
pub mod session;
pub mod user;

pub use message::{Message, MessageWithAuthor};
pub use session::keys as session_keys;
pub use user::User;
