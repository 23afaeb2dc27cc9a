mod adoptions;
mod contact;
mod errors;
mod fosters;
mod volunteers;

pub use adoptions::submit_adoption;
pub use contact::submit_contact;
pub use errors::SubmitError;
pub use fosters::submit_foster;
pub use volunteers::submit_volunteer;

use actix_web::HttpResponse;
use anyhow::Context;
use serde::de::DeserializeOwned;
use validator::ValidationErrors;

use crate::email_client::EmailClient;
use crate::notifications::{DispatchOutcome, Notify, Renderer, dispatch};
use crate::routes::helpers::SuccessBody;

/// Shared pipeline behind every form endpoint: parse, validate, render both
/// emails, then deliver them organisation first.
///
/// The calling handler's span must declare an `applicant_email` field.
async fn submit<F, A>(
    body: &[u8],
    renderer: &Renderer,
    email_client: &EmailClient,
) -> Result<HttpResponse, SubmitError>
where
    F: DeserializeOwned,
    A: TryFrom<F, Error = ValidationErrors> + Notify,
{
    let kind = A::KIND;

    let form: F = serde_json::from_slice(body)
        .with_context(|| format!("Failed to parse the submitted {kind}."))
        .map_err(|e| SubmitError::UnexpectedError(kind, e))?;
    let submission = A::try_from(form).map_err(|e| SubmitError::ValidationError(kind, e))?;

    tracing::Span::current().record(
        "applicant_email",
        tracing::field::display(submission.applicant_email()),
    );

    let notifications = submission
        .notifications(renderer)
        .map_err(|e| SubmitError::UnexpectedError(kind, e))?;

    match dispatch(email_client, &notifications).await {
        DispatchOutcome::Delivered => {}
        DispatchOutcome::SecondarySoftFailed(e) => {
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to send the {} confirmation to the applicant",
                kind
            );
        }
        DispatchOutcome::PrimaryFailed(e) => {
            let e = anyhow::Error::new(e)
                .context(format!("Failed to deliver the {kind} to the organisation."));
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to notify the organisation"
            );
            return Err(SubmitError::UnexpectedError(kind, e));
        }
    }

    Ok(HttpResponse::Ok().json(SuccessBody::new(kind.success_message())))
}
