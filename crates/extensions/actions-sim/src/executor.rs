//! Simulated action executor.

use async_trait::async_trait;
use tracing::info;

use aiva_protocols::action::ActionExecutor;
use aiva_protocols::error::ActionError;

/// Executor that simulates both automation actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedActionExecutor;

impl SimulatedActionExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ActionExecutor for SimulatedActionExecutor {
    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, ActionError> {
        info!(
            recipient,
            subject,
            body_len = body.len(),
            "simulating email send"
        );
        Ok(format!(
            "Successfully sent an email to {} with the subject '{}'.",
            recipient, subject
        ))
    }

    async fn schedule_meeting(
        &self,
        title: &str,
        date: &str,
        time: &str,
        attendees: &[String],
    ) -> Result<String, ActionError> {
        info!(
            title,
            date,
            time,
            attendee_count = attendees.len(),
            "simulating meeting scheduling"
        );
        Ok(format!(
            "Successfully scheduled '{}' on {} at {} with {} attendee(s).",
            title,
            date,
            time,
            attendees.len()
        ))
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
