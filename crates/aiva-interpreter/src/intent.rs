//! Intent resolution from the raw classifier reply.

use serde_json::Value;

use aiva_protocols::intent::{Intent, RawClassification};

/// Guidance returned when a classified email command lacks parameters.
pub(crate) const EMAIL_GUIDANCE: &str = "To send an email I need a recipient, a subject, \
and a body. Please repeat the command with the missing details.";

/// Guidance returned when a classified meeting command lacks parameters.
pub(crate) const MEETING_GUIDANCE: &str = "To schedule a meeting I need a title, a date, \
a time, and a list of attendees. Please repeat the command with the missing details.";

/// Guidance returned when the command was not recognized at all.
pub(crate) const UNRECOGNIZED_GUIDANCE: &str = "Sorry, I couldn't understand that command. \
I can send emails or schedule meetings.";

/// A known action was classified but required parameters were absent.
///
/// This is a normal outcome of interpretation, not a server error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDetails {
    pub guidance: &'static str,
}

fn string_param(parameters: &std::collections::BTreeMap<String, Value>, key: &str) -> Option<String> {
    parameters.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_list_param(
    parameters: &std::collections::BTreeMap<String, Value>,
    key: &str,
) -> Option<Vec<String>> {
    let items = parameters.get(key)?.as_array()?;
    items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

/// Resolve a raw classification into a validated [`Intent`].
///
/// Dispatch happens on the exact `action` tag. Presence of the required
/// parameters is the only validation performed; a present-but-wrongly-typed
/// value counts as missing.
pub fn resolve_intent(raw: RawClassification) -> Result<Intent, MissingDetails> {
    match raw.action.as_str() {
        "send_email" => {
            let recipient = string_param(&raw.parameters, "recipient");
            let subject = string_param(&raw.parameters, "subject");
            let body = string_param(&raw.parameters, "body");
            match (recipient, subject, body) {
                (Some(recipient), Some(subject), Some(body)) => Ok(Intent::SendEmail {
                    recipient,
                    subject,
                    body,
                }),
                _ => Err(MissingDetails {
                    guidance: EMAIL_GUIDANCE,
                }),
            }
        }
        "schedule_meeting" => {
            let title = string_param(&raw.parameters, "title");
            let date = string_param(&raw.parameters, "date");
            let time = string_param(&raw.parameters, "time");
            let attendees = string_list_param(&raw.parameters, "attendees");
            match (title, date, time, attendees) {
                (Some(title), Some(date), Some(time), Some(attendees)) => {
                    Ok(Intent::ScheduleMeeting {
                        title,
                        date,
                        time,
                        attendees,
                    })
                }
                _ => Err(MissingDetails {
                    guidance: MEETING_GUIDANCE,
                }),
            }
        }
        // Any other tag, `unknown` included, is an unrecognized command.
        _ => Ok(Intent::Unknown {
            message: raw.error_message,
        }),
    }
}

#[cfg(test)]
#[path = "intent_tests.rs"]
mod tests;
