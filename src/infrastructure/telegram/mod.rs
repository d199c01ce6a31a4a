use crate::controllers::{
    callbacks::CallbackController, commands::Command, commands::CommandController,
    messages::MessageController,
};
use crate::domain::shared::{ChatTransport, Keyboard, TransportError};
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, Recipient};

/// Telegram implementation of the chat transport
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn to_markup(keyboard: &Keyboard) -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(keyboard.iter().map(|row| {
            row.iter()
                .map(|button| {
                    InlineKeyboardButton::callback(button.label.clone(), button.callback_data.clone())
                })
                .collect::<Vec<_>>()
        }))
    }
}

fn request_error(e: teloxide::RequestError) -> TransportError {
    TransportError::Request(e.to_string())
}

/// Numeric chat id or `@handle`
pub fn parse_address(address: &str) -> Result<Recipient, TransportError> {
    let address = address.trim();
    if let Ok(id) = address.parse::<i64>() {
        return Ok(Recipient::Id(ChatId(id)));
    }
    if address.len() > 1 && address.starts_with('@') {
        return Ok(Recipient::ChannelUsername(address.to_string()));
    }
    Err(TransportError::InvalidAddress(address.to_string()))
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), TransportError> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map(|_| ())
            .map_err(request_error)
    }

    async fn send_with_buttons(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<(), TransportError> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .reply_markup(Self::to_markup(keyboard))
            .await
            .map(|_| ())
            .map_err(request_error)
    }

    async fn edit_message(
        &self,
        chat_id: i64,
        message_id: i32,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), TransportError> {
        let mut request = self
            .bot
            .edit_message_text(ChatId(chat_id), MessageId(message_id), text);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(Self::to_markup(keyboard));
        }
        request.await.map(|_| ()).map_err(request_error)
    }

    async fn send_typing(&self, chat_id: i64) -> Result<(), TransportError> {
        self.bot
            .send_chat_action(ChatId(chat_id), ChatAction::Typing)
            .await
            .map(|_| ())
            .map_err(request_error)
    }

    async fn send_to_address(&self, address: &str, text: &str) -> Result<(), TransportError> {
        let recipient = parse_address(address)?;
        self.bot
            .send_message(recipient, text)
            .await
            .map(|_| ())
            .map_err(request_error)
    }
}

/// Start long polling with all handlers wired
pub async fn start_bot(
    bot: Bot,
    command_controller: Arc<CommandController>,
    callback_controller: Arc<CallbackController>,
    message_controller: Arc<MessageController>,
) {
    // Commands first, so /start and friends never reach the message pipeline
    let command_handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(CommandController::handle);

    let callback_handler = Update::filter_callback_query().endpoint(CallbackController::handle);

    let message_handler = Update::filter_message().endpoint(MessageController::handle);

    let handler = dptree::entry()
        .branch(command_handler)
        .branch(callback_handler)
        .branch(message_handler);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![
            command_controller,
            callback_controller,
            message_controller
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
