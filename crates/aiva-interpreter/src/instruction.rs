//! Fixed system instruction for command classification.

/// System instruction sent with every classification request.
///
/// The model must reply with only a single JSON object carrying an
/// `action` tag and a `parameters` mapping.
pub const CLASSIFIER_INSTRUCTION: &str = "\
You are a command interpreter for an automation assistant. Classify the \
user's command into exactly one of the following actions and extract its \
parameters.

Supported actions:
1. \"send_email\" - parameters: \"recipient\" (string), \"subject\" (string), \
\"body\" (string).
2. \"schedule_meeting\" - parameters: \"title\" (string), \"date\" (string), \
\"time\" (string), \"attendees\" (array of strings).

If the command does not match either action, use the action \"unknown\" and \
add an \"error_message\" explaining briefly why.

Reply with ONLY a single JSON object of the form:
{\"action\": \"send_email\" | \"schedule_meeting\" | \"unknown\", \
\"parameters\": { ... }}
Do not wrap the object in markdown and do not add any other text.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_names_both_actions() {
        assert!(CLASSIFIER_INSTRUCTION.contains("send_email"));
        assert!(CLASSIFIER_INSTRUCTION.contains("schedule_meeting"));
        assert!(CLASSIFIER_INSTRUCTION.contains("unknown"));
    }

    #[test]
    fn test_instruction_lists_required_parameters() {
        for param in ["recipient", "subject", "body", "title", "date", "time", "attendees"] {
            assert!(
                CLASSIFIER_INSTRUCTION.contains(param),
                "missing parameter {param}"
            );
        }
    }

    #[test]
    fn test_instruction_demands_json_only() {
        assert!(CLASSIFIER_INSTRUCTION.contains("ONLY a single JSON object"));
    }
}
