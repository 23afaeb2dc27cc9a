use anyhow::Context;
use reqwest::{Client, StatusCode, Url, header};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::{NewsletterError, NewsletterProvider, SubscriptionOutcome};
use crate::configuration::SenderNewsletterSettings;
use crate::domain::SubscriberEmail;

/// Adapter for the Sender.net subscribers API.
pub struct SenderProvider {
    http_client: Client,
    api_url: Url,
    api_token: Option<SecretString>,
    group_id: Option<String>,
}

#[derive(Serialize)]
struct CreateSubscriberRequest<'a> {
    email: &'a str,
    groups: [&'a str; 1],
    trigger_automation: bool,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl SenderProvider {
    pub fn new(
        api_url: &str,
        api_token: Option<SecretString>,
        group_id: Option<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, anyhow::Error> {
        let api_url = Url::parse(api_url)
            .with_context(|| format!("Failed parsing newsletter api url {api_url}."))?;
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the newsletter http client.")?;

        Ok(Self {
            http_client,
            api_url,
            // Blank values in the environment count as not configured.
            api_token: api_token.filter(|token| !token.expose_secret().trim().is_empty()),
            group_id: group_id.filter(|group| !group.trim().is_empty()),
        })
    }

    pub fn from_settings(settings: &SenderNewsletterSettings) -> Result<Self, anyhow::Error> {
        Self::new(
            &settings.api_url,
            settings.api_token.clone(),
            settings.group_id.clone(),
            settings.timeout(),
        )
    }
}

#[async_trait::async_trait]
impl NewsletterProvider for SenderProvider {
    #[tracing::instrument(name = "Subscribing to the Sender newsletter", skip(self))]
    async fn subscribe(&self, email: &str) -> Result<SubscriptionOutcome, NewsletterError> {
        let email = SubscriberEmail::parse(email.to_string()).map_err(NewsletterError::InvalidEmail)?;

        let (Some(api_token), Some(group_id)) = (&self.api_token, &self.group_id) else {
            tracing::error!("Sender api token or group id is missing");
            return Err(NewsletterError::Unavailable);
        };

        let response = self
            .http_client
            .post(self.api_url.clone())
            .bearer_auth(api_token.expose_secret())
            .header(header::ACCEPT, "application/json")
            .json(&CreateSubscriberRequest {
                email: email.as_ref(),
                groups: [group_id.as_str()],
                trigger_automation: false,
            })
            .send()
            .await
            .context("Failed to reach the Sender api.")?;

        let status = response.status();
        if status.is_success() {
            return Ok(SubscriptionOutcome::Subscribed);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();
        if status == StatusCode::UNPROCESSABLE_ENTITY && message.contains("already exists") {
            return Err(NewsletterError::AlreadySubscribed);
        }

        tracing::error!(status = status.as_u16(), %message, "Sender api rejected the subscription");
        Err(NewsletterError::Rejected {
            status: status.as_u16(),
        })
    }
}
