use super::*;

#[test]
fn test_raw_classification_full() {
    let json = r#"{
        "action": "send_email",
        "parameters": {"recipient": "a@b.com", "subject": "hi", "body": "text"}
    }"#;
    let raw: RawClassification = serde_json::from_str(json).unwrap();
    assert_eq!(raw.action, "send_email");
    assert_eq!(raw.parameters.len(), 3);
    assert!(raw.error_message.is_none());
}

#[test]
fn test_raw_classification_parameters_default_empty() {
    let json = r#"{"action": "unknown"}"#;
    let raw: RawClassification = serde_json::from_str(json).unwrap();
    assert!(raw.parameters.is_empty());
}

#[test]
fn test_raw_classification_error_message() {
    let json = r#"{"action": "unknown", "parameters": {}, "error_message": "no idea"}"#;
    let raw: RawClassification = serde_json::from_str(json).unwrap();
    assert_eq!(raw.error_message.as_deref(), Some("no idea"));
}

#[test]
fn test_raw_classification_missing_action_defaults_empty() {
    let raw: RawClassification = serde_json::from_str(r#"{"parameters": {}}"#).unwrap();
    assert_eq!(raw.action, "");
}

#[test]
fn test_outcome_status_serde() {
    let json = serde_json::to_string(&OutcomeStatus::Success).unwrap();
    assert_eq!(json, r#""success""#);
    let json = serde_json::to_string(&OutcomeStatus::Error).unwrap();
    assert_eq!(json, r#""error""#);
}

#[test]
fn test_dispatch_outcome_success() {
    let outcome = DispatchOutcome::success("done");
    assert_eq!(outcome.status, OutcomeStatus::Success);
    assert_eq!(outcome.message, "done");
}

#[test]
fn test_dispatch_outcome_rejected() {
    let outcome = DispatchOutcome::rejected("missing details");
    assert_eq!(outcome.status, OutcomeStatus::Error);
}

#[test]
fn test_dispatch_outcome_serializes_status_field() {
    let outcome = DispatchOutcome::success("ok");
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "ok");
}
