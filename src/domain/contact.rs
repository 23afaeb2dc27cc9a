use validator::{Validate, ValidationErrors};

use super::validation::{
    optional_text, parse_choice, parse_email, parse_timestamp, trim_in_place, validate_timestamp,
};
use super::{ContactSubject, EmailAddress, SubmittedAt};

#[derive(Debug, Default, Clone, serde::Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    #[validate(length(min = 2, message = "Το όνομα είναι υποχρεωτικό"))]
    pub name: String,
    #[validate(email(message = "Μη έγκυρη διεύθυνση email"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(custom(function = "ContactSubject::validate_code", message = "Επιλέξτε θέμα"))]
    pub subject: String,
    #[validate(length(
        min = 10,
        message = "Το μήνυμα πρέπει να έχει τουλάχιστον 10 χαρακτήρες"
    ))]
    pub message: String,
    #[validate(custom(
        function = "validate_timestamp",
        message = "Μη έγκυρη ημερομηνία υποβολής"
    ))]
    pub submitted_at: String,
}

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub subject: ContactSubject,
    pub message: String,
    pub submitted_at: SubmittedAt,
}

impl TryFrom<ContactForm> for ContactMessage {
    type Error = ValidationErrors;

    fn try_from(mut form: ContactForm) -> Result<Self, Self::Error> {
        trim_in_place([
            &mut form.name,
            &mut form.email,
            &mut form.message,
            &mut form.submitted_at,
        ]);
        form.validate()?;

        Ok(Self {
            name: form.name,
            email: parse_email("email", form.email)?,
            phone: optional_text(form.phone),
            subject: parse_choice("subject", &form.subject)?,
            message: form.message,
            submitted_at: parse_timestamp("submittedAt", &form.submitted_at)?,
        })
    }
}
