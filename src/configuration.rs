use std::time::Duration;

use chrono_tz::Tz;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::{EmailAddress, Mailbox};
use crate::email_client::EmailClient;
use crate::newsletter::ProviderKind;
use crate::notifications::FormKind;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub app: ApplicationSettings,
    pub organization: OrganizationSettings,
    pub email_client: EmailClientSettings,
    pub newsletter: NewsletterSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Organisation details printed in, and receiving, the notifications.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct OrganizationSettings {
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    /// IANA zone name used when printing submission times.
    pub time_zone: String,
}

impl OrganizationSettings {
    pub fn time_zone(&self) -> Result<Tz, String> {
        self.time_zone
            .parse()
            .map_err(|_| format!("{} is not a known time zone.", self.time_zone))
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub auth_token: SecretString,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_ms: u64,
    pub senders: SenderAddresses,
}

impl EmailClientSettings {
    pub fn client(&self) -> Result<EmailClient, anyhow::Error> {
        EmailClient::new(&self.base_url, self.auth_token.clone(), self.timeout())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Sender address per form. Local configuration points all of them at the
/// provider's sandbox sender, production at the branded mailboxes.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct SenderAddresses {
    pub adoption: EmailAddress,
    pub foster: EmailAddress,
    pub volunteer: EmailAddress,
    pub contact: EmailAddress,
}

impl SenderAddresses {
    pub fn mailbox(&self, form: FormKind) -> Mailbox {
        let address = match form {
            FormKind::Adoption => &self.adoption,
            FormKind::Foster => &self.foster,
            FormKind::Volunteer => &self.volunteer,
            FormKind::Contact => &self.contact,
        };
        Mailbox::new(form.sender_name(), address.clone())
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct NewsletterSettings {
    #[serde(default, deserialize_with = "deserialize_provider")]
    pub provider: Option<ProviderKind>,
    pub sender: SenderNewsletterSettings,
}

/// A blank provider name (e.g. `APP_NEWSLETTER__PROVIDER=""`) means none.
fn deserialize_provider<'de, D>(deserializer: D) -> Result<Option<ProviderKind>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(name) if !name.trim().is_empty() => ProviderKind::parse(name.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Sender.net subscriber API.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct SenderNewsletterSettings {
    pub api_url: String,
    pub api_token: Option<SecretString>,
    pub group_id: Option<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_ms: u64,
}

impl SenderNewsletterSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Local)
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine current directory");
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENV");

    let settings = config::Config::builder()
        .set_override("environment", env.as_str())?
        .add_source(config::File::from(conf_dir.join("base.yaml")).required(true))
        .add_source(config::File::from(conf_dir.join(format!("{}.yaml", env.as_str()))).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
