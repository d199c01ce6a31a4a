use super::{chat_user_from, HandlerResult};
use crate::{
    domain::{
        shared::{texts, BotSettings, ChatTransport},
        subscription::{SubscriptionService, SubscriptionServiceError},
        user::ChatUser,
    },
    error::AppResult,
    infrastructure::repositories::UserRepository,
};
use std::sync::Arc;
use teloxide::{types::Message, utils::command::BotCommands};

#[derive(Debug, Clone, BotCommands)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    /// Start and register
    Start,
    /// Show help
    Help,
    /// Show subscription plans
    Subscribe,
    /// Activate a subscription (operator only): /activate <user_id> <plan_id>
    Activate(String),
}

pub struct CommandController {
    user_repo: Arc<UserRepository>,
    subscription_service: Arc<SubscriptionService>,
    transport: Arc<dyn ChatTransport>,
    settings: Arc<BotSettings>,
}

impl CommandController {
    pub fn new(
        user_repo: Arc<UserRepository>,
        subscription_service: Arc<SubscriptionService>,
        transport: Arc<dyn ChatTransport>,
        settings: Arc<BotSettings>,
    ) -> Self {
        Self {
            user_repo,
            subscription_service,
            transport,
            settings,
        }
    }

    /// Dispatcher endpoint for bot commands
    pub async fn handle(
        msg: Message,
        cmd: Command,
        controller: Arc<CommandController>,
    ) -> HandlerResult {
        let Some(user) = msg.from.as_ref().map(chat_user_from) else {
            return Ok(());
        };
        let chat_id = msg.chat.id.0;

        tracing::info!(user_id = user.id, command = ?cmd, "Command received");

        if let Err(e) = controller.execute(chat_id, &user, cmd).await {
            tracing::error!(user_id = user.id, error = %e, "Command failed");
        }

        Ok(())
    }

    pub async fn execute(&self, chat_id: i64, user: &ChatUser, cmd: Command) -> AppResult<()> {
        match cmd {
            Command::Start => self.start(chat_id, user).await,
            Command::Help => self.help(chat_id).await,
            Command::Subscribe => {
                self.subscription_service.show_plans(chat_id, user).await?;
                Ok(())
            }
            Command::Activate(args) => self.activate(chat_id, user, &args).await,
        }
    }

    async fn start(&self, chat_id: i64, user: &ChatUser) -> AppResult<()> {
        self.user_repo
            .ensure_user(user.id, user.display_name())
            .await?;

        self.transport
            .send_with_buttons(
                chat_id,
                &texts::welcome_text(&self.settings),
                &self.subscription_service.main_menu_keyboard(),
            )
            .await?;
        Ok(())
    }

    async fn help(&self, chat_id: i64) -> AppResult<()> {
        self.transport
            .send_text(chat_id, texts::HELP_TEXT)
            .await?;
        Ok(())
    }

    async fn activate(&self, chat_id: i64, operator: &ChatUser, args: &str) -> AppResult<()> {
        let reply = match parse_activate_args(args) {
            None if !self.settings.is_operator(operator) => texts::UNAUTHORIZED_TEXT.to_string(),
            None => texts::ACTIVATE_USAGE_TEXT.to_string(),
            Some((user_id, plan_id)) => {
                match self
                    .subscription_service
                    .activate(operator, user_id, &plan_id)
                    .await
                {
                    Ok(_) => texts::activation_confirmed_text(
                        user_id,
                        &self.settings.plan_title(&plan_id),
                    ),
                    Err(SubscriptionServiceError::Unauthorized(_)) => {
                        tracing::warn!(user_id = operator.id, "Unauthorized activation attempt");
                        texts::UNAUTHORIZED_TEXT.to_string()
                    }
                    Err(SubscriptionServiceError::Invalid(msg)) => msg,
                    Err(e) => return Err(e.into()),
                }
            }
        };

        self.transport
            .send_text(chat_id, &reply)
            .await?;
        Ok(())
    }
}

/// `<user_id> <plan_id>`
pub fn parse_activate_args(args: &str) -> Option<(i64, String)> {
    let mut parts = args.split_whitespace();
    let user_id = parts.next()?.parse().ok()?;
    let plan_id = parts.next()?.to_string();
    if parts.next().is_some() {
        return None;
    }
    Some((user_id, plan_id))
}
