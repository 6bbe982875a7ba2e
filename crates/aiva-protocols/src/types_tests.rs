use super::*;

#[test]
fn test_turn_role_as_str() {
    assert_eq!(TurnRole::User.as_str(), "user");
    assert_eq!(TurnRole::Model.as_str(), "model");
}

#[test]
fn test_turn_role_serde_lowercase() {
    let json = serde_json::to_string(&TurnRole::Model).unwrap();
    assert_eq!(json, r#""model""#);

    let role: TurnRole = serde_json::from_str(r#""user""#).unwrap();
    assert_eq!(role, TurnRole::User);
}

#[test]
fn test_turn_role_rejects_unknown() {
    let result: Result<TurnRole, _> = serde_json::from_str(r#""assistant""#);
    assert!(result.is_err());
}

#[test]
fn test_chat_turn_user() {
    let turn = ChatTurn::user("Hello");
    assert_eq!(turn.role, TurnRole::User);
    assert_eq!(turn.parts.len(), 1);
    assert_eq!(turn.text(), "Hello");
}

#[test]
fn test_chat_turn_text_joins_parts() {
    let turn = ChatTurn {
        role: TurnRole::Model,
        parts: vec![TurnPart::new("Hello, "), TurnPart::new("world")],
    };
    assert_eq!(turn.text(), "Hello, world");
}

#[test]
fn test_chat_turn_deserialize_wire_shape() {
    let json = r#"{"role": "user", "parts": [{"text": "hi"}]}"#;
    let turn: ChatTurn = serde_json::from_str(json).unwrap();
    assert_eq!(turn.role, TurnRole::User);
    assert_eq!(turn.parts[0].text, "hi");
}
