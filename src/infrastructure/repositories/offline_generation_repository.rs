use super::generation_repository::GenerationRepository;
use crate::domain::chat::{GenerationError, GenerationResult};
use async_trait::async_trait;

/// Canned replies used whenever no generation service is configured
pub struct OfflineGenerationRepository {
    developer_name: String,
    operator_contact: String,
}

impl OfflineGenerationRepository {
    pub fn new(developer_name: String, operator_contact: String) -> Self {
        Self {
            developer_name,
            operator_contact,
        }
    }
}

#[async_trait]
impl GenerationRepository for OfflineGenerationRepository {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerationError> {
        Ok(GenerationResult::Text(format!(
            "Here you go. I received your message: «{}»\n\nAnswering from the shadows...\n\n— {} | {}",
            prompt, self.developer_name, self.operator_contact
        )))
    }
}
