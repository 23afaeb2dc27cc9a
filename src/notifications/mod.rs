//! Email notifications produced by the application forms.
//!
//! Every accepted submission yields two messages: a full dump for the
//! organisation inbox and an acknowledgement for the applicant. Bodies are
//! Greek HTML rendered from the templates under `views/emails`.

mod adoption;
mod contact;
mod dispatch;
mod foster;
mod volunteer;

use anyhow::Context as _;
use chrono_tz::Tz;
use tera::{Context, Tera};

use crate::configuration::{OrganizationSettings, SenderAddresses};
use crate::domain::{EmailAddress, SubmittedAt};
use crate::email_client::EmailMessage;

pub use dispatch::{DispatchOutcome, dispatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Adoption,
    Foster,
    Volunteer,
    Contact,
}

impl FormKind {
    pub fn sender_name(self) -> &'static str {
        match self {
            FormKind::Adoption => "Αιτήσεις Υιοθεσίας",
            FormKind::Foster => "Αιτήσεις Φιλοξενίας",
            FormKind::Volunteer => "Αιτήσεις Εθελοντισμού",
            FormKind::Contact => "Επικοινωνία",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Adoption => "Adoption application submitted successfully",
            FormKind::Foster => "Foster application submitted successfully",
            FormKind::Volunteer => "Volunteer application submitted successfully",
            FormKind::Contact => "Contact message sent successfully",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            FormKind::Adoption => "Failed to submit adoption application",
            FormKind::Foster => "Failed to submit foster application",
            FormKind::Volunteer => "Failed to submit volunteer application",
            FormKind::Contact => "Failed to send contact message",
        }
    }

    pub fn invalid_message(self) -> &'static str {
        match self {
            FormKind::Adoption => "Invalid adoption application",
            FormKind::Foster => "Invalid foster application",
            FormKind::Volunteer => "Invalid volunteer application",
            FormKind::Contact => "Invalid contact message",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormKind::Adoption => "adoption application",
            FormKind::Foster => "foster application",
            FormKind::Volunteer => "volunteer application",
            FormKind::Contact => "contact message",
        };
        f.write_str(name)
    }
}

/// The two emails produced for one submission.
#[derive(Debug, Clone)]
pub struct Notifications {
    pub organization: EmailMessage,
    pub confirmation: EmailMessage,
}

/// A validated submission that knows how to describe itself by email.
pub trait Notify {
    const KIND: FormKind;

    fn applicant_email(&self) -> &EmailAddress;

    fn notifications(&self, renderer: &Renderer) -> Result<Notifications, anyhow::Error>;
}

const TEMPLATES: &[(&str, &str)] = &[
    (
        "emails/adoption_organization.html",
        include_str!("../../views/emails/adoption_organization.html"),
    ),
    (
        "emails/adoption_confirmation.html",
        include_str!("../../views/emails/adoption_confirmation.html"),
    ),
    (
        "emails/foster_organization.html",
        include_str!("../../views/emails/foster_organization.html"),
    ),
    (
        "emails/foster_confirmation.html",
        include_str!("../../views/emails/foster_confirmation.html"),
    ),
    (
        "emails/volunteer_organization.html",
        include_str!("../../views/emails/volunteer_organization.html"),
    ),
    (
        "emails/volunteer_confirmation.html",
        include_str!("../../views/emails/volunteer_confirmation.html"),
    ),
    (
        "emails/contact_organization.html",
        include_str!("../../views/emails/contact_organization.html"),
    ),
    (
        "emails/contact_confirmation.html",
        include_str!("../../views/emails/contact_confirmation.html"),
    ),
    (
        "emails/signature.html",
        include_str!("../../views/emails/signature.html"),
    ),
];

/// Renders notification emails. Built once at startup and shared by all
/// workers.
pub struct Renderer {
    templates: Tera,
    organization: OrganizationSettings,
    time_zone: Tz,
    senders: SenderAddresses,
}

impl Renderer {
    pub fn new(
        organization: OrganizationSettings,
        senders: SenderAddresses,
    ) -> Result<Self, anyhow::Error> {
        let mut templates = Tera::default();
        templates
            .add_raw_templates(TEMPLATES.iter().copied())
            .context("Failed to register email templates.")?;
        let time_zone = organization.time_zone().map_err(anyhow::Error::msg)?;

        Ok(Self {
            templates,
            organization,
            time_zone,
            senders,
        })
    }

    /// Context shared by every template: organisation details and the
    /// submission time.
    fn context(&self, submitted_at: &SubmittedAt) -> Context {
        let mut ctx = Context::new();
        ctx.insert("organization_name", &self.organization.name);
        ctx.insert("organization_phone", &self.organization.phone);
        ctx.insert("submitted_at", &submitted_at.to_greek_locale(self.time_zone));
        ctx
    }

    fn render(&self, template_name: &str, ctx: &Context) -> Result<String, anyhow::Error> {
        self.templates
            .render(template_name, ctx)
            .with_context(|| format!("Failed rendering email template {template_name}."))
    }

    fn to_organization(
        &self,
        form: FormKind,
        subject: String,
        html: String,
        reply_to: Option<EmailAddress>,
    ) -> EmailMessage {
        EmailMessage {
            from: self.senders.mailbox(form),
            to: self.organization.email.clone(),
            subject,
            html,
            reply_to,
        }
    }

    fn to_applicant(
        &self,
        form: FormKind,
        applicant: &EmailAddress,
        subject: String,
        html: String,
    ) -> EmailMessage {
        EmailMessage {
            from: self.senders.mailbox(form),
            to: applicant.clone(),
            subject,
            html,
            reply_to: None,
        }
    }
}

/// ` - {name}` suffix used in subjects when the form was opened from an
/// animal's page.
fn animal_suffix(animal: Option<&crate::domain::AnimalReference>) -> String {
    animal
        .map(|animal| format!(" - {}", animal.name))
        .unwrap_or_default()
}
