use actix_web::{HttpResponse, web};

use super::{SubmitError, submit};
use crate::domain::{ContactMessage, ContactForm};
use crate::email_client::EmailClient;
use crate::notifications::Renderer;

#[tracing::instrument(
    name = "Submitting a contact message",
    skip_all,
    fields(applicant_email = tracing::field::Empty)
)]
pub async fn submit_contact(
    body: web::Bytes,
    renderer: web::Data<Renderer>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, SubmitError> {
    submit::<ContactForm, ContactMessage>(&body, &renderer, &email_client).await
}
