use super::generation_repository::GenerationRepository;
use crate::domain::chat::{GenerationError, GenerationResult};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    prompt: &'a str,
}

/// HTTP implementation of the generation repository
pub struct HttpGenerationRepository {
    endpoint: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl HttpGenerationRepository {
    pub fn new(endpoint: String, api_key: String, timeout: Duration) -> Result<Self, GenerationError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint,
            api_key,
            http_client,
        })
    }

    fn map_send_error(e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout
        } else {
            GenerationError::Request(e.to_string())
        }
    }
}

#[async_trait]
impl GenerationRepository for HttpGenerationRepository {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerationError> {
        let start_time = std::time::Instant::now();

        tracing::debug!(
            endpoint = %self.endpoint,
            prompt_length = prompt.len(),
            "Calling generation service"
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&GenerationRequest { prompt })
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GenerationError::Timeout
            } else {
                GenerationError::Malformed(e.to_string())
            }
        })?;

        tracing::info!(
            provider = "http",
            latency_ms = start_time.elapsed().as_millis(),
            "Generation service responded"
        );

        Ok(GenerationResult::from_json(body))
    }
}
