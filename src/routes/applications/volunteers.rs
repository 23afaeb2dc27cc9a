use actix_web::{HttpResponse, web};

use super::{SubmitError, submit};
use crate::domain::{VolunteerApplication, VolunteerForm};
use crate::email_client::EmailClient;
use crate::notifications::Renderer;

#[tracing::instrument(
    name = "Submitting a volunteer application",
    skip_all,
    fields(applicant_email = tracing::field::Empty)
)]
pub async fn submit_volunteer(
    body: web::Bytes,
    renderer: web::Data<Renderer>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, SubmitError> {
    submit::<VolunteerForm, VolunteerApplication>(&body, &renderer, &email_client).await
}
