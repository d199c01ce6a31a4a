pub mod calendar;
pub mod settings;
pub mod texts;
pub mod transport;

pub use settings::BotSettings;
pub use transport::{Button, ChatTransport, Keyboard, TransportError};
