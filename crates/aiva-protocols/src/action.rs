//! Automation action executor trait.

use async_trait::async_trait;

use crate::error::ActionError;

/// Capability interface for the two supported automation actions.
///
/// The shipped implementation only simulates the actions; a real email or
/// calendar integration can replace it without touching dispatch logic.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    /// Send an email. Returns a human-readable confirmation.
    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, ActionError>;

    /// Schedule a meeting. Returns a human-readable confirmation.
    async fn schedule_meeting(
        &self,
        title: &str,
        date: &str,
        time: &str,
        attendees: &[String],
    ) -> Result<String, ActionError>;
}
