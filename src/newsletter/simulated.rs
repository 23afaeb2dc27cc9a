use super::{NewsletterError, NewsletterProvider, SubscriptionOutcome};

/// Stands in for a real provider during local development.
pub struct SimulatedProvider;

#[async_trait::async_trait]
impl NewsletterProvider for SimulatedProvider {
    async fn subscribe(&self, email: &str) -> Result<SubscriptionOutcome, NewsletterError> {
        tracing::info!(email, "DEV MODE: simulating newsletter subscription");
        Ok(SubscriptionOutcome::Simulated {
            email: email.to_string(),
        })
    }
}

/// Active provider when none is configured outside development.
pub struct UnconfiguredProvider;

#[async_trait::async_trait]
impl NewsletterProvider for UnconfiguredProvider {
    async fn subscribe(&self, _email: &str) -> Result<SubscriptionOutcome, NewsletterError> {
        tracing::error!("Newsletter subscription attempted but no provider is configured");
        Err(NewsletterError::Unavailable)
    }
}
