use actix_web::{HttpResponse, web};

use super::{SubmitError, submit};
use crate::domain::{FosterApplication, FosterForm};
use crate::email_client::EmailClient;
use crate::notifications::Renderer;

#[tracing::instrument(
    name = "Submitting a foster application",
    skip_all,
    fields(applicant_email = tracing::field::Empty)
)]
pub async fn submit_foster(
    body: web::Bytes,
    renderer: web::Data<Renderer>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, SubmitError> {
    submit::<FosterForm, FosterApplication>(&body, &renderer, &email_client).await
}
