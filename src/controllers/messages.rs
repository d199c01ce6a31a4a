use super::{chat_user_from, HandlerResult};
use crate::domain::chat::{ChatService, IncomingMessage};
use std::sync::Arc;
use teloxide::types::{Message, MessageEntity, MessageEntityKind};

pub struct MessageController {
    chat_service: Arc<ChatService>,
}

impl MessageController {
    pub fn new(chat_service: Arc<ChatService>) -> Self {
        Self { chat_service }
    }

    /// Dispatcher endpoint for plain text messages
    pub async fn handle(msg: Message, controller: Arc<MessageController>) -> HandlerResult {
        let Some(text) = msg.text() else {
            return Ok(());
        };
        // Unknown commands are not prompts; other text starting with '/' is
        if msg.entities().is_some_and(starts_with_command) {
            return Ok(());
        }
        let Some(user) = msg.from.as_ref().map(chat_user_from) else {
            return Ok(());
        };

        let incoming = IncomingMessage {
            chat_id: msg.chat.id.0,
            user,
            text: text.to_string(),
        };

        let outcome = controller.chat_service.handle_message(&incoming).await;
        tracing::debug!(user_id = incoming.user.id, ?outcome, "Message handled");

        Ok(())
    }
}

/// Whether the message opens with a bot command entity
fn starts_with_command(entities: &[MessageEntity]) -> bool {
    entities
        .iter()
        .any(|e| e.offset == 0 && e.kind == MessageEntityKind::BotCommand)
}
