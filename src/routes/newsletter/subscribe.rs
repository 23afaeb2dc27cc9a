use actix_web::{HttpResponse, web};
use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::newsletter::{NewsletterError, NewsletterRouter, ProviderKind, SubscriptionOutcome};
use crate::routes::helpers::SuccessBody;

#[derive(Deserialize)]
struct SubscriptionRequest {
    #[serde(default)]
    email: Option<String>,
}

#[derive(Serialize)]
struct SimulatedBody<'a> {
    success: bool,
    message: &'a str,
    dev: bool,
    email: &'a str,
}

/// `POST /api/newsletter`: hands the address to the provider chosen at
/// startup.
#[tracing::instrument(
    name = "Subscribing to the newsletter",
    skip_all,
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn subscribe(
    body: web::Bytes,
    router: web::Data<NewsletterRouter>,
) -> Result<HttpResponse, NewsletterError> {
    let email = parse_request(&body)?;
    let outcome = router.active().subscribe(&email).await?;
    Ok(respond(outcome))
}

/// `POST /api/newsletter/{provider}`: talks to one adapter directly.
#[tracing::instrument(
    name = "Subscribing through a newsletter provider",
    skip(body, router),
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn subscribe_with_provider(
    provider: web::Path<String>,
    body: web::Bytes,
    router: web::Data<NewsletterRouter>,
) -> Result<HttpResponse, NewsletterError> {
    let kind = ProviderKind::parse(&provider)?;
    let email = parse_request(&body)?;
    let outcome = router.adapter(kind)?.subscribe(&email).await?;
    Ok(respond(outcome))
}

fn parse_request(body: &[u8]) -> Result<String, NewsletterError> {
    let request: SubscriptionRequest =
        serde_json::from_slice(body).context("Failed to parse the subscription request.")?;
    let email = request.email.unwrap_or_default();
    tracing::Span::current().record("subscriber_email", tracing::field::display(&email));
    Ok(email)
}

fn respond(outcome: SubscriptionOutcome) -> HttpResponse {
    match outcome {
        SubscriptionOutcome::Subscribed => {
            HttpResponse::Ok().json(SuccessBody::new("Επιτυχής εγγραφή στο newsletter!"))
        }
        SubscriptionOutcome::Simulated { email } => HttpResponse::Ok().json(SimulatedBody {
            success: true,
            message: "Επιτυχής εγγραφή στο newsletter! (DEV MODE)",
            dev: true,
            email: &email,
        }),
    }
}
