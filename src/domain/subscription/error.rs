use crate::domain::shared::TransportError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SubscriptionServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl From<AppError> for SubscriptionServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => SubscriptionServiceError::Invalid(msg),
            AppError::Unauthorized(msg) => SubscriptionServiceError::Unauthorized(msg),
            _ => SubscriptionServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<SubscriptionServiceError> for AppError {
    fn from(err: SubscriptionServiceError) -> Self {
        match err {
            SubscriptionServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SubscriptionServiceError::Unauthorized(msg) => AppError::Unauthorized(msg),
            SubscriptionServiceError::Dependency(msg) => AppError::Internal(msg),
            SubscriptionServiceError::Transport(e) => AppError::Transport(e.to_string()),
        }
    }
}
