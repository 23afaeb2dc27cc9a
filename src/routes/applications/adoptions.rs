use actix_web::{HttpResponse, web};

use super::{SubmitError, submit};
use crate::domain::{AdoptionApplication, AdoptionForm};
use crate::email_client::EmailClient;
use crate::notifications::Renderer;

#[tracing::instrument(
    name = "Submitting an adoption application",
    skip_all,
    fields(applicant_email = tracing::field::Empty)
)]
pub async fn submit_adoption(
    body: web::Bytes,
    renderer: web::Data<Renderer>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, SubmitError> {
    submit::<AdoptionForm, AdoptionApplication>(&body, &renderer, &email_client).await
}
