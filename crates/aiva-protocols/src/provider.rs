//! Text generation provider trait.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::ChatTurn;

/// Core trait for generative-language providers.
///
/// Handlers receive this as an injected `Arc<dyn TextGenerator>` so that
/// tests can substitute a double for the real HTTP client.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the provider ID.
    fn id(&self) -> &str;

    /// Send a full conversation history and return the model's text reply.
    async fn chat(&self, history: &[ChatTurn]) -> Result<String, ProviderError>;

    /// Send a system instruction plus a single user input, requesting a
    /// reply constrained to JSON. Returns the raw reply text; the caller
    /// is responsible for parsing it.
    async fn generate_json(
        &self,
        system_instruction: &str,
        input: &str,
    ) -> Result<String, ProviderError>;
}
