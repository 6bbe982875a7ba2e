//! Gemini API client.

use reqwest::Client;
use tracing::debug;

use aiva_protocols::error::ProviderError;

use crate::types::*;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API client.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(api_key: String) -> Self {
        Self {
            client: build_client(std::time::Duration::from_secs(300)),
            base_url: BASE_URL.to_string(),
            api_key,
        }
    }

    /// Override the API base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout (used by tests).
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.client = build_client(timeout);
        self
    }

    /// Generate content (non-streaming).
    pub async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        debug!("Gemini generate_content: model={}", model);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            let error: Result<GeminiError, _> = serde_json::from_str(&body);
            return match error {
                Ok(e) => Err(ProviderError::Api {
                    status: status.as_u16(),
                    message: e.error.message,
                }),
                Err(_) => Err(ProviderError::Api {
                    status: status.as_u16(),
                    message: body,
                }),
            };
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::MalformedReply(e.to_string()))
    }
}

fn build_client(timeout: std::time::Duration) -> Client {
    Client::builder()
        .connect_timeout(std::time::Duration::from_secs(10))
        .timeout(timeout)
        .build()
        .expect("Failed to build HTTP client")
}

fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Network(e.to_string())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
