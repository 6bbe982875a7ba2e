//! Gemini [`TextGenerator`] implementation.

use async_trait::async_trait;
use tracing::debug;

use aiva_protocols::error::ProviderError;
use aiva_protocols::provider::TextGenerator;
use aiva_protocols::types::ChatTurn;

use crate::client::GeminiClient;
use crate::types::*;

/// Gemini-backed text generation provider.
pub struct GeminiProvider {
    client: GeminiClient,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider for the given model.
    pub fn new(api_key: String, model: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            model: model.into(),
        }
    }

    /// Override the API base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(base_url);
        self
    }

    fn convert_history(history: &[ChatTurn]) -> Vec<Content> {
        history
            .iter()
            .map(|turn| Content {
                role: turn.role.as_str().to_string(),
                parts: turn.parts.iter().map(|p| Part::text(&p.text)).collect(),
            })
            .collect()
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    fn id(&self) -> &str {
        "gemini"
    }

    async fn chat(&self, history: &[ChatTurn]) -> Result<String, ProviderError> {
        debug!("chat request with {} turn(s)", history.len());

        let request = GenerateContentRequest {
            contents: Self::convert_history(history),
            system_instruction: None,
            generation_config: None,
        };

        let response = self.client.generate_content(&self.model, request).await?;
        response.first_text().ok_or(ProviderError::EmptyReply)
    }

    async fn generate_json(
        &self,
        system_instruction: &str,
        input: &str,
    ) -> Result<String, ProviderError> {
        debug!("classification request: {} byte(s) of input", input.len());

        let request = GenerateContentRequest {
            contents: vec![Content::new("user", input)],
            system_instruction: Some(Content::new("user", system_instruction)),
            generation_config: Some(GenerationConfig::json()),
        };

        let response = self.client.generate_content(&self.model, request).await?;
        response.first_text().ok_or(ProviderError::EmptyReply)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
