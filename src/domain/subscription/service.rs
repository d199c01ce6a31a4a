use super::callback::{plan_token, CallbackAction, CANCEL_PLAN, HELP_BUTTON, OPEN_SUBSCRIBE};
use super::error::SubscriptionServiceError;
use crate::domain::shared::{texts, BotSettings, Button, ChatTransport, Keyboard};
use crate::domain::user::{ChatUser, UserRecord};
use crate::infrastructure::repositories::UserRepository;
use std::sync::Arc;

/// A button press on one of the bot's inline keyboards
#[derive(Debug, Clone)]
pub struct CallbackEvent {
    pub chat_id: i64,
    /// Message carrying the keyboard, when the platform still exposes it
    pub message_id: Option<i32>,
    pub user: ChatUser,
    pub data: String,
}

/// Where one subscription interaction ended up
#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionState {
    Idle,
    PlansShown,
    /// A plan was picked and the request forwarded (delivery is best-effort)
    NotifiedOperator { plan_id: String, plan_title: String },
    Cancelled,
}

pub struct SubscriptionService {
    user_repo: Arc<UserRepository>,
    transport: Arc<dyn ChatTransport>,
    settings: Arc<BotSettings>,
}

impl SubscriptionService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        transport: Arc<dyn ChatTransport>,
        settings: Arc<BotSettings>,
    ) -> Self {
        Self {
            user_repo,
            transport,
            settings,
        }
    }

    /// Plan buttons in catalog order, followed by a cancel button
    pub fn plans_keyboard(&self) -> Keyboard {
        let mut rows: Keyboard = self
            .settings
            .plans
            .iter()
            .map(|plan| vec![Button::new(plan.title.clone(), plan_token(&plan.id))])
            .collect();
        rows.push(vec![Button::new(
            texts::CANCEL_LABEL,
            plan_token(CANCEL_PLAN),
        )]);
        rows
    }

    pub fn main_menu_keyboard(&self) -> Keyboard {
        vec![vec![
            Button::new(texts::SUBSCRIBE_LABEL, OPEN_SUBSCRIBE),
            Button::new(texts::INFO_LABEL, HELP_BUTTON),
        ]]
    }

    /// Send the plan list as a fresh message (the `/subscribe` command)
    pub async fn show_plans(
        &self,
        chat_id: i64,
        user: &ChatUser,
    ) -> Result<SubscriptionState, SubscriptionServiceError> {
        self.user_repo
            .ensure_user(user.id, user.display_name())
            .await?;

        self.transport
            .send_with_buttons(chat_id, texts::CHOOSE_PLAN_TEXT, &self.plans_keyboard())
            .await?;

        Ok(SubscriptionState::PlansShown)
    }

    /// React to a button press. Failures are logged, never returned.
    pub async fn handle_callback(&self, event: &CallbackEvent) -> SubscriptionState {
        tracing::info!(
            user_id = event.user.id,
            data = %event.data,
            "Callback received"
        );

        match CallbackAction::parse(&event.data) {
            CallbackAction::OpenSubscribe => {
                let keyboard = self.plans_keyboard();
                self.replace_message(event, texts::CHOOSE_PLAN_FROM_MENU_TEXT, Some(&keyboard))
                    .await;
                SubscriptionState::PlansShown
            }
            CallbackAction::ShowHelp => {
                self.replace_message(event, texts::HELP_TEXT, None).await;
                SubscriptionState::Idle
            }
            CallbackAction::Cancel => {
                self.replace_message(event, texts::CANCELLED_TEXT, None).await;
                SubscriptionState::Cancelled
            }
            CallbackAction::SelectPlan(plan_id) => self.select_plan(event, plan_id).await,
            CallbackAction::Unknown(data) => {
                tracing::warn!(user_id = event.user.id, data = %data, "Unknown callback data");
                SubscriptionState::Idle
            }
        }
    }

    async fn select_plan(&self, event: &CallbackEvent, plan_id: String) -> SubscriptionState {
        let plan_title = self.settings.plan_title(&plan_id);
        if self.settings.find_plan(&plan_id).is_none() {
            tracing::warn!(plan_id = %plan_id, "Unknown plan selected, using raw id as title");
        }

        let notification = texts::operator_notification(&event.user, &plan_title);
        self.notify_operator(&notification).await;

        let confirmation = texts::request_sent_text(&self.settings, &plan_title);
        self.replace_message(event, &confirmation, None).await;

        tracing::info!(
            user_id = event.user.id,
            plan_id = %plan_id,
            "Subscription request forwarded to operator"
        );

        SubscriptionState::NotifiedOperator {
            plan_id,
            plan_title,
        }
    }

    /// Operator-only activation of a subscription (`/activate`)
    pub async fn activate(
        &self,
        operator: &ChatUser,
        user_id: i64,
        plan_id: &str,
    ) -> Result<UserRecord, SubscriptionServiceError> {
        if !self.settings.is_operator(operator) {
            return Err(SubscriptionServiceError::Unauthorized(format!(
                "user {} is not the operator",
                operator.id
            )));
        }

        let plan = self.settings.find_plan(plan_id).ok_or_else(|| {
            SubscriptionServiceError::Invalid(format!("unknown plan: {}", plan_id))
        })?;

        let user = self.user_repo.set_subscription(user_id, &plan.id).await?;

        tracing::info!(
            user_id,
            plan_id = %plan.id,
            operator_id = operator.id,
            "Subscription activated"
        );

        // Private chats share the user's id
        if let Err(e) = self
            .transport
            .send_text(user_id, &texts::subscription_activated_text(&plan.title))
            .await
        {
            tracing::warn!(user_id, error = %e, "Activation notice not delivered");
        }

        Ok(user)
    }

    /// Deliver a message to the operator. Never fails the caller.
    pub async fn notify_operator(&self, text: &str) {
        if let Err(e) = self
            .transport
            .send_to_address(&self.settings.operator_contact, text)
            .await
        {
            tracing::warn!(
                operator = %self.settings.operator_contact,
                error = %e,
                "Could not deliver message to operator"
            );
        }
    }

    /// Edit the keyboard's message in place, or send a new one if it is gone
    async fn replace_message(&self, event: &CallbackEvent, text: &str, keyboard: Option<&Keyboard>) {
        let result = match (event.message_id, keyboard) {
            (Some(message_id), _) => {
                self.transport
                    .edit_message(event.chat_id, message_id, text, keyboard)
                    .await
            }
            (None, Some(keyboard)) => {
                self.transport
                    .send_with_buttons(event.chat_id, text, keyboard)
                    .await
            }
            (None, None) => self.transport.send_text(event.chat_id, text).await,
        };

        if let Err(e) = result {
            tracing::warn!(
                chat_id = event.chat_id,
                error = %e,
                "Could not update subscription message"
            );
        }
    }
}
