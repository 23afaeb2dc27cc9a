use validator::{Validate, ValidationErrors};

use super::validation::{
    must_be_affirmed, optional_text, parse_choice, parse_choices, parse_email, parse_timestamp,
    trim_in_place, validate_timestamp,
};
use super::{
    AnimalCategory, AnimalReference, Applicant, FosterDuration, FosteredBefore, HousingType,
    MedicalCare, SubmittedAt, Transport, YesNo,
};

#[derive(Debug, Default, Clone, serde::Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct FosterForm {
    #[validate(length(min = 2, message = "Το όνομα πρέπει να έχει τουλάχιστον 2 χαρακτήρες"))]
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
        function = "FosterDuration::validate_code",
        message = "Επιλέξτε διάρκεια φιλοξενίας"
    ))]
    pub foster_duration: String,
    #[validate(
        length(min = 1, message = "Επιλέξτε τουλάχιστον έναν τύπο"),
        custom(
            function = "AnimalCategory::validate_codes",
            message = "Μη έγκυρος τύπος ζώου"
        )
    )]
    pub preferred_types: Vec<String>,
    #[validate(custom(
        function = "MedicalCare::validate_code",
        message = "Επιλέξτε αν μπορείτε να φροντίσετε ζώα με ιατρικές ανάγκες"
    ))]
    pub can_handle_medical: String,
    #[validate(custom(
        function = "Transport::validate_code",
        message = "Επιλέξτε αν μπορείτε να μεταφέρετε το ζώο"
    ))]
    pub can_transport: String,
    #[validate(custom(
        function = "YesNo::validate_code",
        message = "Επιλέξτε αν είχατε ζώα στο παρελθόν"
    ))]
    pub had_pets_before: String,
    pub current_pets: Option<String>,
    #[validate(custom(
        function = "FosteredBefore::validate_code",
        message = "Επιλέξτε αν έχετε φιλοξενήσει ζώα στο παρελθόν"
    ))]
    pub fostered_before: String,
    #[validate(length(min = 5, message = "Περιγράψτε το πρόγραμμα εργασίας σας"))]
    pub work_schedule: String,
    #[validate(length(min = 20, message = "Παρακαλώ γράψτε τουλάχιστον 20 χαρακτήρες"))]
    pub why_foster: String,
    #[validate(custom(
        function = "must_be_affirmed",
        message = "Πρέπει να συμφωνήσετε να επιστρέψετε το ζώο"
    ))]
    pub agree_to_return_animal: bool,
    #[validate(custom(
        function = "must_be_affirmed",
        message = "Πρέπει να συμφωνήσετε με τις οδηγίες"
    ))]
    pub agree_to_follow_guidelines: bool,
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
pub struct FosterApplication {
    pub applicant: Applicant,
    pub housing_type: HousingType,
    pub has_yard: YesNo,
    pub foster_duration: FosterDuration,
    pub preferred_types: Vec<AnimalCategory>,
    pub can_handle_medical: MedicalCare,
    pub can_transport: Transport,
    pub had_pets_before: YesNo,
    pub current_pets: Option<String>,
    pub fostered_before: FosteredBefore,
    pub work_schedule: String,
    pub why_foster: String,
    pub animal: Option<AnimalReference>,
    pub submitted_at: SubmittedAt,
}

impl TryFrom<FosterForm> for FosterApplication {
    type Error = ValidationErrors;

    fn try_from(mut form: FosterForm) -> Result<Self, Self::Error> {
        trim_in_place([
            &mut form.full_name,
            &mut form.email,
            &mut form.phone,
            &mut form.address,
            &mut form.city,
            &mut form.work_schedule,
            &mut form.why_foster,
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
            foster_duration: parse_choice("fosterDuration", &form.foster_duration)?,
            preferred_types: parse_choices("preferredTypes", &form.preferred_types)?,
            can_handle_medical: parse_choice("canHandleMedical", &form.can_handle_medical)?,
            can_transport: parse_choice("canTransport", &form.can_transport)?,
            had_pets_before: parse_choice("hadPetsBefore", &form.had_pets_before)?,
            current_pets: optional_text(form.current_pets),
            fostered_before: parse_choice("fosteredBefore", &form.fostered_before)?,
            work_schedule: form.work_schedule,
            why_foster: form.why_foster,
            animal: AnimalReference::from_parts(form.animal_id, form.animal_name),
            submitted_at: parse_timestamp("submittedAt", &form.submitted_at)?,
        })
    }
}
