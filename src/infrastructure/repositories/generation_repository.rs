use crate::domain::chat::{GenerationError, GenerationResult};
use async_trait::async_trait;

/// Repository for text generation.
/// Abstracts the backend that turns a prompt into a reply.
///
/// Implementations are responsible for:
/// - Authenticating against the provider
/// - Mapping transport failures into `GenerationError`
/// - Extracting the reply from the provider's body
#[async_trait]
pub trait GenerationRepository: Send + Sync {
    /// Generate a reply for a single prompt. At most one attempt is made.
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerationError>;
}
