use async_trait::async_trait;
use chat_gateway_bot::domain::shared::{ChatTransport, Keyboard, TransportError};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// One outbound call captured by `RecordingTransport`
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text {
        chat_id: i64,
        text: String,
    },
    Buttons {
        chat_id: i64,
        text: String,
        keyboard: Keyboard,
    },
    Edit {
        chat_id: i64,
        message_id: i32,
        text: String,
        keyboard: Option<Keyboard>,
    },
    Typing {
        chat_id: i64,
    },
    Address {
        address: String,
        text: String,
    },
}

/// In-memory chat platform that records everything it is asked to deliver
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<Sent>>,
    fail_address: AtomicBool,
    fail_typing: AtomicBool,
}

impl RecordingTransport {
    pub fn fail_address_delivery(&self) {
        self.fail_address.store(true, Ordering::SeqCst);
    }

    pub fn fail_typing(&self) {
        self.fail_typing.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().clone()
    }

    /// Plain text messages delivered to `chat_id`, in order
    pub fn texts_to(&self, chat_id: i64) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .filter_map(|s| match s {
                Sent::Text { chat_id: id, text } if *id == chat_id => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn address_messages(&self) -> Vec<(String, String)> {
        self.sent
            .lock()
            .iter()
            .filter_map(|s| match s {
                Sent::Address { address, text } => Some((address.clone(), text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn typing_count(&self) -> usize {
        self.sent
            .lock()
            .iter()
            .filter(|s| matches!(s, Sent::Typing { .. }))
            .count()
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().push(sent);
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), TransportError> {
        self.record(Sent::Text {
            chat_id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_with_buttons(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<(), TransportError> {
        self.record(Sent::Buttons {
            chat_id,
            text: text.to_string(),
            keyboard: keyboard.clone(),
        });
        Ok(())
    }

    async fn edit_message(
        &self,
        chat_id: i64,
        message_id: i32,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), TransportError> {
        self.record(Sent::Edit {
            chat_id,
            message_id,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        });
        Ok(())
    }

    async fn send_typing(&self, chat_id: i64) -> Result<(), TransportError> {
        if self.fail_typing.load(Ordering::SeqCst) {
            return Err(TransportError::Request("typing unavailable".to_string()));
        }
        self.record(Sent::Typing { chat_id });
        Ok(())
    }

    async fn send_to_address(&self, address: &str, text: &str) -> Result<(), TransportError> {
        if self.fail_address.load(Ordering::SeqCst) {
            return Err(TransportError::InvalidAddress(address.to_string()));
        }
        self.record(Sent::Address {
            address: address.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}
