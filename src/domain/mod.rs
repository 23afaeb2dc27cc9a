mod adoption;
mod applicant;
mod choices;
mod contact;
mod email_address;
mod foster;
mod mailbox;
mod submitted_at;
mod subscriber_email;
pub mod validation;
mod volunteer;

pub use adoption::{AdoptionApplication, AdoptionForm};
pub use applicant::{AnimalReference, Applicant};
pub use choices::{
    AgeBracket, AnimalCategory, Choice, ContactSubject, FosterDuration, FosteredBefore,
    HousingType, MedicalCare, Transport, VolunteerRole, Weekday, WeeklyHours, YesNo,
    joined_labels,
};
pub use contact::{ContactForm, ContactMessage};
pub use email_address::EmailAddress;
pub use foster::{FosterApplication, FosterForm};
pub use mailbox::Mailbox;
pub use submitted_at::SubmittedAt;
pub use subscriber_email::SubscriberEmail;
pub use volunteer::{VolunteerApplication, VolunteerForm};
