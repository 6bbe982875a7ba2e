//! Error types shared across crates.

use thiserror::Error;

/// Generative-language provider errors.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Model reply was not valid JSON: {0}")]
    MalformedReply(String),

    #[error("Model returned no candidates")]
    EmptyReply,

    #[error("Request to the model timed out")]
    Timeout,
}

/// Automation action errors.
///
/// The simulated executor never fails; this exists for real integrations.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Email delivery failed: {0}")]
    EmailFailed(String),

    #[error("Meeting scheduling failed: {0}")]
    MeetingFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_api() {
        let err = ProviderError::Api {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Internal Server Error"));
    }

    #[test]
    fn test_provider_error_network() {
        let err = ProviderError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Network error"));
    }

    #[test]
    fn test_provider_error_malformed_reply() {
        let err = ProviderError::MalformedReply("expected value at line 1".to_string());
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_provider_error_timeout() {
        let err = ProviderError::Timeout;
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_provider_error_empty_reply() {
        let err = ProviderError::EmptyReply;
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn test_action_error_email() {
        let err = ActionError::EmailFailed("SMTP unreachable".to_string());
        assert!(err.to_string().contains("Email delivery failed"));
    }
}
