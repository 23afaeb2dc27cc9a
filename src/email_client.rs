use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::domain::{EmailAddress, Mailbox};

/// One outbound transactional email.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub from: Mailbox,
    pub to: EmailAddress,
    pub subject: String,
    pub html: String,
    pub reply_to: Option<EmailAddress>,
}

#[derive(Clone, Debug)]
pub struct EmailClient {
    http_client: Client,
    send_url: Url,
    auth_token: SecretString,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

impl EmailClient {
    pub fn new(
        base_url: &str,
        auth_token: SecretString,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let send_url = Url::parse(base_url)
            .and_then(|url| url.join("emails"))
            .with_context(|| format!("Failed parsing email api url {base_url}."))?;
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the email http client.")?;

        Ok(Self {
            http_client,
            send_url,
            auth_token,
        })
    }

    #[tracing::instrument(
        name = "Sending an email",
        skip(self, message),
        fields(recipient = %message.to, subject = %message.subject)
    )]
    pub async fn send_email(&self, message: &EmailMessage) -> Result<(), reqwest::Error> {
        let body = SendEmailRequest {
            from: message.from.to_string(),
            to: vec![message.to.as_ref()],
            subject: &message.subject,
            html: &message.html,
            reply_to: message.reply_to.as_ref().map(AsRef::as_ref),
        };

        self.http_client
            .post(self.send_url.clone())
            .bearer_auth(self.auth_token.expose_secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
