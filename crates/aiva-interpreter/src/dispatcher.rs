//! Command dispatcher.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use aiva_protocols::action::ActionExecutor;
use aiva_protocols::error::{ActionError, ProviderError};
use aiva_protocols::intent::{DispatchOutcome, Intent, RawClassification};
use aiva_protocols::provider::TextGenerator;

use crate::instruction::CLASSIFIER_INSTRUCTION;
use crate::intent::{resolve_intent, UNRECOGNIZED_GUIDANCE};

/// Failures while classifying or executing a command.
///
/// Rejections (unknown intent, missing parameters) are not errors; they
/// surface as a [`DispatchOutcome`] with `error` status instead.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Action(#[from] ActionError),
}

/// Interprets free-text commands and dispatches automation actions.
///
/// Both collaborators are injected so tests can substitute doubles.
pub struct CommandDispatcher {
    generator: Arc<dyn TextGenerator>,
    executor: Arc<dyn ActionExecutor>,
}

impl CommandDispatcher {
    pub fn new(generator: Arc<dyn TextGenerator>, executor: Arc<dyn ActionExecutor>) -> Self {
        Self {
            generator,
            executor,
        }
    }

    /// Classify one command and carry out the matching action.
    ///
    /// A malformed classifier reply is a [`ProviderError`]; it is not
    /// retried and surfaces to the caller as a server-side failure.
    pub async fn dispatch(&self, command: &str) -> Result<DispatchOutcome, DispatchError> {
        let reply = self
            .generator
            .generate_json(CLASSIFIER_INSTRUCTION, command)
            .await?;

        let raw: RawClassification = serde_json::from_str(&reply).map_err(|e| {
            warn!("classifier reply was not valid JSON: {}", e);
            ProviderError::MalformedReply(e.to_string())
        })?;

        debug!(action = %raw.action, "classified command");

        let intent = match resolve_intent(raw) {
            Ok(intent) => intent,
            Err(missing) => return Ok(DispatchOutcome::rejected(missing.guidance)),
        };

        let outcome = match intent {
            Intent::SendEmail {
                recipient,
                subject,
                body,
            } => {
                let confirmation = self
                    .executor
                    .send_email(&recipient, &subject, &body)
                    .await?;
                DispatchOutcome::success(confirmation)
            }
            Intent::ScheduleMeeting {
                title,
                date,
                time,
                attendees,
            } => {
                let confirmation = self
                    .executor
                    .schedule_meeting(&title, &date, &time, &attendees)
                    .await?;
                DispatchOutcome::success(confirmation)
            }
            Intent::Unknown { message } => DispatchOutcome::rejected(
                message.unwrap_or_else(|| UNRECOGNIZED_GUIDANCE.to_string()),
            ),
        };

        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
