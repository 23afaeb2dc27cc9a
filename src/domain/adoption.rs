use validator::{Validate, ValidationErrors};

use super::validation::{
    must_be_affirmed, optional_text, parse_choice, parse_email, parse_timestamp, trim_in_place,
    validate_timestamp,
};
use super::{AnimalReference, Applicant, HousingType, SubmittedAt, YesNo};

/// Adoption form exactly as the browser submits it.
///
/// Every field defaults to empty so that missing fields are reported by the
/// validation rules alongside the rest instead of failing deserialization.
#[derive(Debug, Default, Clone, serde::Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct AdoptionForm {
    #[validate(length(
        min = 2,
        message = "Το ονοματεπώνυμο πρέπει να έχει τουλάχιστον 2 χαρακτήρες"
    ))]
    pub full_name: String,
    #[validate(email(message = "Μη έγκυρη διεύθυνση email"))]
    pub email: String,
    #[validate(length(min = 10, message = "Μη έγκυρος αριθμός τηλεφώνου"))]
    pub phone: String,
    #[validate(length(min = 5, message = "Η διεύθυνση είναι υποχρεωτική"))]
    pub address: String,
    #[validate(length(min = 2, message = "Η πόλη είναι υποχρεωτική"))]
    pub city: String,
    #[validate(custom(
        function = "HousingType::validate_code",
        message = "Επιλέξτε τον τύπο κατοικίας"
    ))]
    pub housing_type: String,
    #[validate(custom(function = "YesNo::validate_code", message = "Επιλέξτε αν έχετε αυλή"))]
    pub has_yard: String,
    #[validate(custom(
        function = "YesNo::validate_code",
        message = "Επιλέξτε αν είχατε ζώα στο παρελθόν"
    ))]
    pub had_pets_before: String,
    pub current_pets: Option<String>,
    #[validate(length(min = 5, message = "Περιγράψτε το πρόγραμμα εργασίας σας"))]
    pub work_schedule: String,
    #[validate(length(min = 10, message = "Περιγράψτε ποιος θα φροντίζει το ζώο"))]
    pub who_will_care: String,
    #[validate(length(min = 20, message = "Παρακαλώ γράψτε τουλάχιστον 20 χαρακτήρες"))]
    pub why_adopt: String,
    #[validate(custom(
        function = "must_be_affirmed",
        message = "Πρέπει να συμφωνήσετε με την επίσκεψη"
    ))]
    pub agree_to_home_visit: bool,
    #[validate(custom(
        function = "must_be_affirmed",
        message = "Πρέπει να συμφωνήσετε με το follow-up"
    ))]
    pub agree_to_follow_up: bool,
    #[validate(custom(function = "must_be_affirmed", message = "Πρέπει να αποδεχτείτε τους όρους"))]
    pub agree_to_terms: bool,
    pub animal_id: Option<String>,
    pub animal_name: Option<String>,
    #[validate(custom(
        function = "validate_timestamp",
        message = "Μη έγκυρη ημερομηνία υποβολής"
    ))]
    pub submitted_at: String,
}

#[derive(Debug, Clone)]
pub struct AdoptionApplication {
    pub applicant: Applicant,
    pub housing_type: HousingType,
    pub has_yard: YesNo,
    pub had_pets_before: YesNo,
    pub current_pets: Option<String>,
    pub work_schedule: String,
    pub who_will_care: String,
    pub why_adopt: String,
    pub animal: Option<AnimalReference>,
    pub submitted_at: SubmittedAt,
}

impl TryFrom<AdoptionForm> for AdoptionApplication {
    type Error = ValidationErrors;

    fn try_from(mut form: AdoptionForm) -> Result<Self, Self::Error> {
        trim_in_place([
            &mut form.full_name,
            &mut form.email,
            &mut form.phone,
            &mut form.address,
            &mut form.city,
            &mut form.work_schedule,
            &mut form.who_will_care,
            &mut form.why_adopt,
            &mut form.submitted_at,
        ]);
        form.validate()?;

        Ok(Self {
            applicant: Applicant {
                full_name: form.full_name,
                email: parse_email("email", form.email)?,
                phone: form.phone,
                address: Some(form.address),
                city: form.city,
            },
            housing_type: parse_choice("housingType", &form.housing_type)?,
            has_yard: parse_choice("hasYard", &form.has_yard)?,
            had_pets_before: parse_choice("hadPetsBefore", &form.had_pets_before)?,
            current_pets: optional_text(form.current_pets),
            work_schedule: form.work_schedule,
            who_will_care: form.who_will_care,
            why_adopt: form.why_adopt,
            animal: AnimalReference::from_parts(form.animal_id, form.animal_name),
            submitted_at: parse_timestamp("submittedAt", &form.submitted_at)?,
        })
    }
}
