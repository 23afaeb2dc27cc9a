use serde_json::{Value, json};

use crate::helpers::{ORGANIZATION_EMAIL, contact_payload, spawn_app, with, without};

#[tokio::test]
async fn contact_message_round_trip() {
    let app = spawn_app().await;
    app.email_api_responds(200, 2).await;

    let response = app.post_json("/api/contact", &contact_payload()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Contact message sent successfully");

    let emails = app.sent_emails().await;
    assert_eq!(emails.len(), 2);
    for email in &emails {
        let html = email["html"].as_str().unwrap();
        assert!(html.contains("Υιοθεσία"));
        assert!(html.contains("I would like information about adopting a dog."));
    }
    assert_eq!(emails[0]["to"], json!([ORGANIZATION_EMAIL]));
    assert_eq!(emails[0]["reply_to"], "maria@example.com");
    assert_eq!(emails[0]["subject"], "Νέο Μήνυμα Επικοινωνίας - Υιοθεσία");
    assert_eq!(emails[1]["to"], json!(["maria@example.com"]));
    assert!(emails[1].get("reply_to").is_none());
}

#[tokio::test]
async fn every_subject_is_accepted() {
    let app = spawn_app().await;
    app.email_api_responds(200, 12).await;

    for subject in ["general", "adoption", "foster", "volunteer", "donation", "other"] {
        let response = app
            .post_json("/api/contact", &with(contact_payload(), "subject", json!(subject)))
            .await;

        assert_eq!(response.status().as_u16(), 200, "subject {subject} was rejected");
    }
}

#[tokio::test]
async fn invalid_messages_are_rejected_before_any_email_is_sent() {
    let app = spawn_app().await;
    app.email_api_responds(200, 0).await;

    let cases = [
        (without(contact_payload(), "name"), "name"),
        (with(contact_payload(), "email", json!("maria.example.com")), "email"),
        (with(contact_payload(), "subject", json!("complaint")), "subject"),
        (with(contact_payload(), "message", json!("Γεια")), "message"),
        (with(contact_payload(), "submittedAt", json!("yesterday")), "submittedAt"),
    ];
    for (payload, field) in cases {
        let response = app.post_json("/api/contact", &payload).await;

        assert_eq!(response.status().as_u16(), 400, "bad {field} was accepted");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Invalid contact message");
        assert!(body["fields"][field].is_array());
    }
}

#[tokio::test]
async fn email_api_outage_returns_500() {
    let app = spawn_app().await;
    app.email_api_responds(503, 1).await;

    let response = app.post_json("/api/contact", &contact_payload()).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Failed to send contact message" }));
}
