use super::EmailAddress;
use super::validation::optional_text;

/// Contact details shared by the application forms.
#[derive(Debug, Clone)]
pub struct Applicant {
    pub full_name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub address: Option<String>,
    pub city: String,
}

/// Animal the application was started from.
///
/// The id and name come from the animal page and are echoed back into the
/// notification as-is; they are not looked up in the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalReference {
    pub id: Option<String>,
    pub name: String,
}

impl AnimalReference {
    pub fn from_parts(id: Option<String>, name: Option<String>) -> Option<Self> {
        optional_text(name).map(|name| Self {
            id: optional_text(id),
            name,
        })
    }
}
