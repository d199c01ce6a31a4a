pub mod callbacks;
pub mod commands;
pub mod messages;

use crate::domain::user::ChatUser;
use crate::error::AppError;

/// Result type shared by every dispatcher endpoint
pub type HandlerResult = Result<(), AppError>;

pub fn chat_user_from(user: &teloxide::types::User) -> ChatUser {
    ChatUser {
        id: user.id.0 as i64,
        username: user.username.clone(),
        full_name: user.full_name(),
    }
}
