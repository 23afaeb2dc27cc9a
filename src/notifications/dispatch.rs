use super::Notifications;
use crate::email_client::EmailClient;

/// How far delivery of a submission's notifications got.
#[derive(Debug)]
pub enum DispatchOutcome {
    Delivered,
    /// The organisation has the submission; only the applicant's
    /// acknowledgement failed.
    SecondarySoftFailed(reqwest::Error),
    /// The organisation was not notified. Nothing was sent to the applicant.
    PrimaryFailed(reqwest::Error),
}

/// Sends the organisation notification, then the applicant confirmation.
/// The confirmation is only attempted once the first send has succeeded.
#[tracing::instrument(
    name = "Dispatching submission notifications",
    skip_all,
    fields(applicant_email = %notifications.confirmation.to)
)]
pub async fn dispatch(email_client: &EmailClient, notifications: &Notifications) -> DispatchOutcome {
    if let Err(e) = email_client.send_email(&notifications.organization).await {
        return DispatchOutcome::PrimaryFailed(e);
    }

    match email_client.send_email(&notifications.confirmation).await {
        Ok(()) => DispatchOutcome::Delivered,
        Err(e) => DispatchOutcome::SecondarySoftFailed(e),
    }
}
