use super::*;

#[tokio::test]
async fn test_send_email_confirmation() {
    let executor = SimulatedActionExecutor::new();
    let message = executor
        .send_email("jane@example.com", "report", "see attached")
        .await
        .unwrap();
    assert_eq!(
        message,
        "Successfully sent an email to jane@example.com with the subject 'report'."
    );
}

#[tokio::test]
async fn test_schedule_meeting_confirmation_mentions_details() {
    let executor = SimulatedActionExecutor::new();
    let attendees = vec!["alice@example.com".to_string(), "bob@example.com".to_string()];
    let message = executor
        .schedule_meeting("Sync", "2026-09-01", "10:00", &attendees)
        .await
        .unwrap();
    assert!(message.contains("Sync"));
    assert!(message.contains("2026-09-01"));
    assert!(message.contains("10:00"));
    assert!(message.contains("2 attendee(s)"));
}

#[tokio::test]
async fn test_schedule_meeting_no_attendees() {
    let executor = SimulatedActionExecutor::new();
    let message = executor
        .schedule_meeting("1:1", "2026-09-02", "15:30", &[])
        .await
        .unwrap();
    assert!(message.contains("0 attendee(s)"));
}
