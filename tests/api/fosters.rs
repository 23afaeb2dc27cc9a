use serde_json::{Value, json};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

use crate::helpers::{ORGANIZATION_EMAIL, foster_payload, spawn_app, with, without};

#[tokio::test]
async fn valid_application_is_accepted() {
    let app = spawn_app().await;
    app.email_api_responds(200, 2).await;

    let response = app.post_json("/api/fosters", &foster_payload()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Foster application submitted successfully");
}

#[tokio::test]
async fn organization_email_lists_every_selected_type() {
    let app = spawn_app().await;
    app.email_api_responds(200, 2).await;

    app.post_json("/api/fosters", &foster_payload()).await;

    let emails = app.sent_emails().await;
    assert_eq!(emails[0]["subject"], "Νέα Αίτηση Φιλοξενίας");
    let html = emails[0]["html"].as_str().unwrap();
    assert!(html.contains("Γατάκια, Ηλικιωμένες γάτες"));
    assert!(html.contains("2-3 μήνες"));
    assert!(html.contains("Εξαρτάται από την περίπτωση"));
    assert!(html.contains("Μερικές φορές"));
    assert!(html.contains("Μία γάτα"));
}

#[tokio::test]
async fn empty_preferred_types_are_rejected() {
    let app = spawn_app().await;
    app.email_api_responds(200, 0).await;

    let response = app
        .post_json("/api/fosters", &with(foster_payload(), "preferredTypes", json!([])))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid foster application");
    assert!(body["fields"]["preferredTypes"].is_array());
}

#[tokio::test]
async fn unknown_animal_category_is_rejected() {
    let app = spawn_app().await;
    app.email_api_responds(200, 0).await;

    let response = app
        .post_json(
            "/api/fosters",
            &with(foster_payload(), "preferredTypes", json!(["kittens", "parrots"])),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn missing_fields_are_rejected_before_any_email_is_sent() {
    let app = spawn_app().await;
    app.email_api_responds(200, 0).await;

    for field in [
        "fullName",
        "email",
        "fosterDuration",
        "preferredTypes",
        "canHandleMedical",
        "canTransport",
        "fosteredBefore",
        "whyFoster",
        "agreeToReturnAnimal",
        "agreeToFollowGuidelines",
        "agreeToTerms",
    ] {
        let response = app
            .post_json("/api/fosters", &without(foster_payload(), field))
            .await;

        assert_eq!(response.status().as_u16(), 400, "accepted without {field}");
    }
}

#[tokio::test]
async fn every_consent_must_be_given() {
    let app = spawn_app().await;
    app.email_api_responds(200, 0).await;

    for consent in ["agreeToReturnAnimal", "agreeToFollowGuidelines", "agreeToTerms"] {
        let response = app
            .post_json("/api/fosters", &with(foster_payload(), consent, json!(false)))
            .await;

        assert_eq!(response.status().as_u16(), 400, "{consent}=false was accepted");
    }
}

#[tokio::test]
async fn confirmation_failure_still_returns_200() {
    let app = spawn_app().await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .and(body_partial_json(json!({ "to": [ORGANIZATION_EMAIL] })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .and(body_partial_json(json!({ "to": ["nikos@example.com"] })))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_json("/api/fosters", &foster_payload()).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn organization_failure_skips_the_confirmation() {
    let app = spawn_app().await;
    Mock::given(path("/emails"))
        .and(body_partial_json(json!({ "to": [ORGANIZATION_EMAIL] })))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(path("/emails"))
        .and(body_partial_json(json!({ "to": ["nikos@example.com"] })))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app.post_json("/api/fosters", &foster_payload()).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to submit foster application");
}
