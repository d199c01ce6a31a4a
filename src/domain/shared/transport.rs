use crate::error::AppError;
use async_trait::async_trait;

/// An inline button: visible label plus the opaque token sent back on press
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
    pub callback_data: String,
}

impl Button {
    pub fn new(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback_data: callback_data.into(),
        }
    }
}

/// Rows of buttons, rendered top to bottom
pub type Keyboard = Vec<Vec<Button>>;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl From<TransportError> for AppError {
    fn from(err: TransportError) -> Self {
        AppError::Transport(err.to_string())
    }
}

/// Outbound side of the chat platform.
///
/// Chat and message ids are the platform's numeric identifiers. Operator
/// delivery goes through `send_to_address`, which accepts either an `@handle`
/// or a numeric chat id.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), TransportError>;

    async fn send_with_buttons(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<(), TransportError>;

    async fn edit_message(
        &self,
        chat_id: i64,
        message_id: i32,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), TransportError>;

    async fn send_typing(&self, chat_id: i64) -> Result<(), TransportError>;

    async fn send_to_address(&self, address: &str, text: &str) -> Result<(), TransportError>;

    /// Typing indicator that can never fail the caller
    async fn send_typing_best_effort(&self, chat_id: i64) {
        if let Err(e) = self.send_typing(chat_id).await {
            tracing::debug!(chat_id, error = %e, "Typing indicator not delivered");
        }
    }
}
