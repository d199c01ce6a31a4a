use crate::domain::shared::TransportError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl From<AppError> for ChatServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Transport(msg) => ChatServiceError::Transport(TransportError::Request(msg)),
            _ => ChatServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ChatServiceError> for AppError {
    fn from(err: ChatServiceError) -> Self {
        match err {
            ChatServiceError::Dependency(msg) => AppError::Internal(msg),
            ChatServiceError::Transport(e) => AppError::Transport(e.to_string()),
        }
    }
}
