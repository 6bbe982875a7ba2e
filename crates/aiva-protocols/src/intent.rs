//! Intent classification types.
//!
//! The classifier model replies with a single JSON object:
//! `{ "action": string, "parameters": object, "error_message"?: string }`.
//! [`RawClassification`] is that wire form; [`Intent`] is the validated
//! sum type dispatch operates on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw classifier reply as returned by the model.
#[derive(Debug, Clone, Deserialize)]
pub struct RawClassification {
    /// Action tag; an absent tag resolves like an unrecognized one.
    #[serde(default)]
    pub action: String,

    /// Parameter map; an absent field is an empty map.
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,

    /// Model-supplied explanation when the action is `unknown`.
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A validated command intent.
///
/// Produced from a [`RawClassification`] in a single parsing step; missing
/// required parameters surface as a rejection, not as a server error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SendEmail {
        recipient: String,
        subject: String,
        body: String,
    },
    ScheduleMeeting {
        title: String,
        date: String,
        time: String,
        attendees: Vec<String>,
    },
    Unknown {
        message: Option<String>,
    },
}

/// Status of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// The action was carried out.
    Success,
    /// The command was understood as far as possible but not actionable:
    /// required parameters were missing or the intent was unrecognized.
    /// A normal outcome, never a server error.
    Error,
}

/// Outcome of interpreting and dispatching one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    pub status: OutcomeStatus,
    pub message: String,
}

impl DispatchOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Success,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "intent_tests.rs"]
mod tests;
