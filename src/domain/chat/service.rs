use super::chunking::split_into_chunks;
use super::error::ChatServiceError;
use super::generation::{GenerationError, GenerationResult};
use crate::domain::quota::QuotaService;
use crate::domain::shared::{texts, BotSettings, ChatTransport};
use crate::domain::user::ChatUser;
use crate::infrastructure::repositories::{GenerationRepository, UserRepository};
use std::sync::Arc;

/// A plain text message received from a user
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub user: ChatUser,
    pub text: String,
}

/// How handling a single message ended
#[derive(Debug, Clone, PartialEq)]
pub enum MessageOutcome {
    /// Rejected by the free tier, no quota consumed
    QuotaExceeded,
    /// Reply delivered in `segments` messages
    Replied { segments: usize },
    /// The user was told something went wrong
    Failed,
}

pub struct ChatService {
    user_repo: Arc<UserRepository>,
    quota_service: Arc<QuotaService>,
    generation_repo: Arc<dyn GenerationRepository>,
    transport: Arc<dyn ChatTransport>,
    settings: Arc<BotSettings>,
}

impl ChatService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        quota_service: Arc<QuotaService>,
        generation_repo: Arc<dyn GenerationRepository>,
        transport: Arc<dyn ChatTransport>,
        settings: Arc<BotSettings>,
    ) -> Self {
        Self {
            user_repo,
            quota_service,
            generation_repo,
            transport,
            settings,
        }
    }

    /// Run one inbound message through quota check, generation and reply.
    ///
    /// Never returns an error: every failure is logged and turned into a
    /// notice for this user only.
    pub async fn handle_message(&self, message: &IncomingMessage) -> MessageOutcome {
        match self.process(message).await {
            Ok(outcome) => outcome,
            Err(ChatServiceError::Transport(e)) => {
                tracing::warn!(
                    user_id = message.user.id,
                    chat_id = message.chat_id,
                    error = %e,
                    "Reply could not be delivered"
                );
                MessageOutcome::Failed
            }
            Err(e) => {
                tracing::error!(
                    user_id = message.user.id,
                    chat_id = message.chat_id,
                    error = %e,
                    "Message handling failed"
                );
                self.send_failure_notice(message.chat_id).await;
                MessageOutcome::Failed
            }
        }
    }

    async fn process(&self, message: &IncomingMessage) -> Result<MessageOutcome, ChatServiceError> {
        let user = &message.user;

        // 1. Register the user
        self.user_repo
            .ensure_user(user.id, user.display_name())
            .await?;

        // 2. Gate on quota before spending anything
        if !self.quota_service.allow(user.id).await? {
            tracing::info!(
                user_id = user.id,
                limit = self.settings.free_daily_limit,
                "Free quota exhausted"
            );
            self.transport
                .send_text(message.chat_id, &texts::quota_exceeded_text(&self.settings))
                .await?;
            return Ok(MessageOutcome::QuotaExceeded);
        }

        // 3. Consume one unit
        let used_today = self.user_repo.record_usage(user.id).await?;
        tracing::info!(user_id = user.id, used_today, "Quota unit consumed");

        // 4. Working indicator
        self.transport.send_typing_best_effort(message.chat_id).await;

        // 5. Call the generation service
        let prompt = message.text.trim();
        let result = match self.generate(prompt).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(
                    user_id = user.id,
                    error = %e,
                    prompt_length = prompt.len(),
                    "Generation service call failed"
                );
                self.send_failure_notice(message.chat_id).await;
                return Ok(MessageOutcome::Failed);
            }
        };

        // 6. Chunk and deliver in order
        let reply = self.format_reply(result);
        let chunks = split_into_chunks(&reply, self.settings.max_message_len);
        for chunk in &chunks {
            self.transport.send_text(message.chat_id, chunk).await?;
        }

        tracing::info!(
            user_id = user.id,
            reply_length = reply.len(),
            segments = chunks.len(),
            "Reply delivered"
        );

        Ok(MessageOutcome::Replied {
            segments: chunks.len(),
        })
    }

    async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerationError> {
        match tokio::time::timeout(
            self.settings.service_timeout,
            self.generation_repo.generate(prompt),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout),
        }
    }

    fn format_reply(&self, result: GenerationResult) -> String {
        let text = result.into_text();
        let body = if text.is_empty() {
            texts::EMPTY_REPLY_TEXT.to_string()
        } else {
            text
        };
        format!("{}{}", body, self.settings.footer())
    }

    async fn send_failure_notice(&self, chat_id: i64) {
        if let Err(e) = self
            .transport
            .send_text(chat_id, texts::PROCESSING_ERROR_TEXT)
            .await
        {
            tracing::warn!(chat_id, error = %e, "Failure notice not delivered");
        }
    }
}
