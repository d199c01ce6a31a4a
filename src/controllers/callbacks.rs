use super::{chat_user_from, HandlerResult};
use crate::domain::subscription::{CallbackEvent, SubscriptionService};
use std::sync::Arc;
use teloxide::prelude::*;

pub struct CallbackController {
    subscription_service: Arc<SubscriptionService>,
}

impl CallbackController {
    pub fn new(subscription_service: Arc<SubscriptionService>) -> Self {
        Self {
            subscription_service,
        }
    }

    /// Dispatcher endpoint for inline button presses
    pub async fn handle(
        bot: Bot,
        q: CallbackQuery,
        controller: Arc<CallbackController>,
    ) -> HandlerResult {
        if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
            tracing::debug!(error = %e, "Callback query not acknowledged");
        }

        let Some(data) = q.data.clone() else {
            return Ok(());
        };

        let user = chat_user_from(&q.from);
        let event = CallbackEvent {
            chat_id: q
                .message
                .as_ref()
                .map(|m| m.chat().id.0)
                .unwrap_or(user.id),
            message_id: q.message.as_ref().map(|m| m.id().0),
            user,
            data,
        };

        let state = controller.subscription_service.handle_callback(&event).await;
        tracing::debug!(user_id = event.user.id, ?state, "Callback handled");

        Ok(())
    }
}
