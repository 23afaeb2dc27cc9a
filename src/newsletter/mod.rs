//! Newsletter sign-ups, delegated to an external mailing-list provider.

mod sender;
mod simulated;

use std::collections::HashMap;
use std::sync::Arc;

use crate::configuration::{Environment, NewsletterSettings};
use crate::routes::error_chain_fmt;

pub use sender::SenderProvider;
pub use simulated::{SimulatedProvider, UnconfiguredProvider};

/// Mailing-list platforms with an adapter in this crate. The lowercase name
/// is both the configuration value and the `/api/newsletter/{provider}`
/// path segment.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Sender,
}

impl ProviderKind {
    pub const ALL: &'static [ProviderKind] = &[ProviderKind::Sender];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Sender => "sender",
        }
    }

    pub fn parse(name: &str) -> Result<Self, NewsletterError> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| NewsletterError::UnknownProvider(name.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    Subscribed,
    /// Nothing left the process; only returned in development.
    Simulated { email: String },
}

#[derive(thiserror::Error)]
pub enum NewsletterError {
    #[error("{0} is not a valid subscriber email.")]
    InvalidEmail(String),
    #[error("The address is already subscribed.")]
    AlreadySubscribed,
    #[error("No newsletter provider is configured.")]
    Unavailable,
    #[error("The provider rejected the subscription with status {status}.")]
    Rejected { status: u16 },
    #[error("There is no newsletter provider called {0}.")]
    UnknownProvider(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for NewsletterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[async_trait::async_trait]
pub trait NewsletterProvider: Send + Sync {
    /// Adds `email` to the provider's list. The address arrives as submitted;
    /// each adapter applies its own checks.
    async fn subscribe(&self, email: &str) -> Result<SubscriptionOutcome, NewsletterError>;
}

/// Provider chosen at startup, plus every adapter that can be built from
/// configuration for the per-provider endpoint.
#[derive(Clone)]
pub struct NewsletterRouter {
    active: Arc<dyn NewsletterProvider>,
    adapters: HashMap<ProviderKind, Arc<dyn NewsletterProvider>>,
}

impl NewsletterRouter {
    pub fn new(
        active: Arc<dyn NewsletterProvider>,
        adapters: HashMap<ProviderKind, Arc<dyn NewsletterProvider>>,
    ) -> Self {
        Self { active, adapters }
    }

    pub fn from_settings(
        settings: &NewsletterSettings,
        environment: Environment,
    ) -> Result<Self, anyhow::Error> {
        let sender: Arc<dyn NewsletterProvider> =
            Arc::new(SenderProvider::from_settings(&settings.sender)?);
        let adapters = HashMap::from([(ProviderKind::Sender, sender)]);

        let active: Arc<dyn NewsletterProvider> = match settings.provider {
            Some(kind) => adapters
                .get(&kind)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("No adapter for provider {}.", kind.as_str()))?,
            None if environment.is_development() => Arc::new(SimulatedProvider),
            None => Arc::new(UnconfiguredProvider),
        };
        tracing::info!(
            provider = settings.provider.map(|kind| kind.as_str()),
            environment = environment.as_str(),
            "Newsletter provider selected"
        );

        Ok(Self::new(active, adapters))
    }

    pub fn active(&self) -> &dyn NewsletterProvider {
        self.active.as_ref()
    }

    pub fn adapter(&self, kind: ProviderKind) -> Result<&dyn NewsletterProvider, NewsletterError> {
        self.adapters
            .get(&kind)
            .map(|adapter| adapter.as_ref())
            .ok_or_else(|| NewsletterError::UnknownProvider(kind.as_str().to_string()))
    }
}
