use serde_json::{Value, json};
use wiremock::{Mock, ResponseTemplate, matchers::any};

use crate::helpers::{ORGANIZATION_EMAIL, adoption_payload, spawn_app, with, without};

const REQUIRED_FIELDS: &[(&str, &str)] = &[
    ("fullName", "missing the full name"),
    ("email", "missing the email"),
    ("phone", "missing the phone"),
    ("address", "missing the address"),
    ("city", "missing the city"),
    ("housingType", "missing the housing type"),
    ("hasYard", "missing the yard answer"),
    ("hadPetsBefore", "missing the pet history"),
    ("workSchedule", "missing the work schedule"),
    ("whoWillCare", "missing the carer"),
    ("whyAdopt", "missing the motivation"),
    ("agreeToHomeVisit", "missing the home visit consent"),
    ("agreeToFollowUp", "missing the follow-up consent"),
    ("agreeToTerms", "missing the terms consent"),
    ("submittedAt", "missing the submission time"),
];

#[tokio::test]
async fn valid_application_returns_200_and_sends_two_emails() {
    let app = spawn_app().await;
    app.email_api_responds(200, 2).await;

    let response = app.post_json("/api/adoptions", &adoption_payload()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Adoption application submitted successfully"
        })
    );
}

#[tokio::test]
async fn organization_is_notified_before_the_applicant() {
    let app = spawn_app().await;
    app.email_api_responds(200, 2).await;

    app.post_json("/api/adoptions", &adoption_payload()).await;

    let emails = app.sent_emails().await;
    assert_eq!(emails[0]["to"], json!([ORGANIZATION_EMAIL]));
    assert_eq!(emails[0]["subject"], "Νέα Αίτηση Υιοθεσίας - Ρεξ");
    assert_eq!(emails[0]["from"], "Αιτήσεις Υιοθεσίας <onboarding@resend.dev>");
    assert_eq!(emails[1]["to"], json!(["maria@example.com"]));
    assert_eq!(emails[1]["subject"], "Λάβαμε την αίτησή σας για υιοθεσία - Ρεξ");
}

#[tokio::test]
async fn choices_reach_the_email_as_labels() {
    let app = spawn_app().await;
    app.email_api_responds(200, 2).await;

    app.post_json("/api/adoptions", &adoption_payload()).await;

    let emails = app.sent_emails().await;
    let html = emails[0]["html"].as_str().unwrap();
    assert!(html.contains("Μονοκατοικία"));
    assert!(html.contains("rex-2026"));
    assert!(html.contains("Κανένα"));
    assert!(html.contains("4:52:07 μ.μ."));
}

#[tokio::test]
async fn missing_fields_are_rejected_before_any_email_is_sent() {
    let app = spawn_app().await;
    app.email_api_responds(200, 0).await;

    for (field, description) in REQUIRED_FIELDS {
        let response = app
            .post_json("/api/adoptions", &without(adoption_payload(), field))
            .await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {description}."
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Invalid adoption application");
        assert!(
            body["fields"][field].is_array(),
            "No error reported for {field}: {body}"
        );
    }
}

#[tokio::test]
async fn every_invalid_field_is_reported_at_once() {
    let app = spawn_app().await;
    app.email_api_responds(200, 0).await;

    let response = app.post_json("/api/adoptions", &json!({})).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    let fields = body["fields"].as_object().unwrap();
    for (field, _) in REQUIRED_FIELDS {
        assert!(fields.contains_key(*field), "{field} was not reported");
    }
    assert!(!fields.contains_key("currentPets"));
    assert!(!fields.contains_key("animalId"));
}

#[tokio::test]
async fn out_of_set_choices_are_rejected() {
    let app = spawn_app().await;
    app.email_api_responds(200, 0).await;

    for (field, value) in [
        ("housingType", "castle"),
        ("hasYard", "maybe"),
        ("hadPetsBefore", "Ναι"),
    ] {
        let response = app
            .post_json("/api/adoptions", &with(adoption_payload(), field, json!(value)))
            .await;

        assert_eq!(response.status().as_u16(), 400, "{field}={value} was accepted");
    }
}

#[tokio::test]
async fn every_consent_must_be_given() {
    let app = spawn_app().await;
    app.email_api_responds(200, 0).await;

    for consent in ["agreeToHomeVisit", "agreeToFollowUp", "agreeToTerms"] {
        let response = app
            .post_json("/api/adoptions", &with(adoption_payload(), consent, json!(false)))
            .await;

        assert_eq!(response.status().as_u16(), 400, "{consent}=false was accepted");
        let body: Value = response.json().await.unwrap();
        assert!(body["fields"][consent].is_array());
    }
}

#[tokio::test]
async fn short_text_reports_the_greek_message() {
    let app = spawn_app().await;
    app.email_api_responds(200, 0).await;

    let response = app
        .post_json("/api/adoptions", &with(adoption_payload(), "whyAdopt", json!("Γιατί όχι")))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    let messages = body["fields"]["whyAdopt"].as_array().unwrap();
    assert!(!messages.is_empty());
    assert!(messages[0].as_str().unwrap().contains("20"));
}

#[tokio::test]
async fn whitespace_only_or_padded_text_is_rejected() {
    let app = spawn_app().await;
    app.email_api_responds(200, 0).await;

    for (field, value) in [
        ("fullName", "    ".to_string()),
        ("whyAdopt", format!("ok{}", " ".repeat(18))),
    ] {
        let response = app
            .post_json("/api/adoptions", &with(adoption_payload(), field, json!(value)))
            .await;

        assert_eq!(response.status().as_u16(), 400, "{field}={value:?} was accepted");
        let body: Value = response.json().await.unwrap();
        assert!(body["fields"][field].is_array(), "No error reported for {field}: {body}");
    }
}

#[tokio::test]
async fn organization_email_failure_returns_500() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_json("/api/adoptions", &adoption_payload()).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Failed to submit adoption application" }));
}

#[tokio::test]
async fn malformed_json_returns_500() {
    let app = spawn_app().await;
    app.email_api_responds(200, 0).await;

    let response = app.post_raw("/api/adoptions", "{\"fullName\": ").await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to submit adoption application");
}

#[tokio::test]
async fn identical_submissions_are_not_deduplicated() {
    let app = spawn_app().await;
    app.email_api_responds(200, 4).await;

    for _ in 0..2 {
        let response = app.post_json("/api/adoptions", &adoption_payload()).await;
        assert_eq!(response.status().as_u16(), 200);
    }
}
