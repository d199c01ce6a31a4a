pub mod chunking;
pub mod error;
pub mod generation;
pub mod service;

pub use chunking::split_into_chunks;
pub use error::ChatServiceError;
pub use generation::{GenerationError, GenerationResult};
pub use service::{ChatService, IncomingMessage, MessageOutcome};
