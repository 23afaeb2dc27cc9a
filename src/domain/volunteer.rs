use validator::{Validate, ValidationErrors};

use super::validation::{
    must_be_affirmed, optional_text, parse_choice, parse_choices, parse_email, parse_timestamp,
    trim_in_place, validate_timestamp,
};
use super::{AgeBracket, Applicant, SubmittedAt, VolunteerRole, WeeklyHours, Weekday, YesNo};

#[derive(Debug, Default, Clone, serde::Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct VolunteerForm {
    #[validate(length(min = 2, message = "Το όνομα είναι υποχρεωτικό"))]
    pub full_name: String,
    #[validate(email(message = "Μη έγκυρη διεύθυνση email"))]
    pub email: String,
    #[validate(length(min = 10, message = "Το τηλέφωνο είναι υποχρεωτικό"))]
    pub phone: String,
    #[validate(custom(function = "AgeBracket::validate_code", message = "Επιλέξτε ηλικιακή ομάδα"))]
    pub age: String,
    #[validate(length(min = 2, message = "Η πόλη είναι υποχρεωτική"))]
    pub city: String,
    #[validate(
        length(min = 1, message = "Επιλέξτε τουλάχιστον μία μέρα"),
        custom(function = "Weekday::validate_codes", message = "Μη έγκυρη μέρα")
    )]
    pub availability: Vec<String>,
    #[validate(custom(function = "WeeklyHours::validate_code", message = "Επιλέξτε διαθεσιμότητα"))]
    pub hours_per_week: String,
    #[validate(
        length(min = 1, message = "Επιλέξτε τουλάχιστον έναν τομέα ενδιαφέροντος"),
        custom(
            function = "VolunteerRole::validate_codes",
            message = "Μη έγκυρος τομέας ενδιαφέροντος"
        )
    )]
    pub interests: Vec<String>,
    #[validate(custom(function = "YesNo::validate_code", message = "Επιλέξτε αν έχετε εμπειρία"))]
    pub has_experience: String,
    pub experience: Option<String>,
    #[validate(length(min = 20, message = "Παρακαλώ γράψτε τουλάχιστον 20 χαρακτήρες"))]
    pub why_volunteer: String,
    pub skills: Option<String>,
    #[validate(custom(function = "must_be_affirmed", message = "Πρέπει να αποδεχτείτε τους όρους"))]
    pub agree_to_terms: bool,
    #[validate(custom(
        function = "validate_timestamp",
        message = "Μη έγκυρη ημερομηνία υποβολής"
    ))]
    pub submitted_at: String,
}

#[derive(Debug, Clone)]
pub struct VolunteerApplication {
    pub applicant: Applicant,
    pub age: AgeBracket,
    pub availability: Vec<Weekday>,
    pub hours_per_week: WeeklyHours,
    pub interests: Vec<VolunteerRole>,
    pub has_experience: YesNo,
    pub experience: Option<String>,
    pub why_volunteer: String,
    pub skills: Option<String>,
    pub submitted_at: SubmittedAt,
}

impl TryFrom<VolunteerForm> for VolunteerApplication {
    type Error = ValidationErrors;

    fn try_from(mut form: VolunteerForm) -> Result<Self, Self::Error> {
        trim_in_place([
            &mut form.full_name,
            &mut form.email,
            &mut form.phone,
            &mut form.city,
            &mut form.why_volunteer,
            &mut form.submitted_at,
        ]);
        form.validate()?;

        Ok(Self {
            applicant: Applicant {
                full_name: form.full_name,
                email: parse_email("email", form.email)?,
                phone: form.phone,
                address: None,
                city: form.city,
            },
            age: parse_choice("age", &form.age)?,
            availability: parse_choices("availability", &form.availability)?,
            hours_per_week: parse_choice("hoursPerWeek", &form.hours_per_week)?,
            interests: parse_choices("interests", &form.interests)?,
            has_experience: parse_choice("hasExperience", &form.has_experience)?,
            experience: optional_text(form.experience),
            why_volunteer: form.why_volunteer,
            skills: optional_text(form.skills),
            submitted_at: parse_timestamp("submittedAt", &form.submitted_at)?,
        })
    }
}
