use super::{FormKind, Notifications, Notify, Renderer};
use crate::domain::{Choice, ContactMessage, EmailAddress};

impl Notify for ContactMessage {
    const KIND: FormKind = FormKind::Contact;

    fn applicant_email(&self) -> &EmailAddress {
        &self.email
    }

    fn notifications(&self, renderer: &Renderer) -> Result<Notifications, anyhow::Error> {
        let subject = self.subject.label();

        let mut ctx = renderer.context(&self.submitted_at);
        ctx.insert("name", &self.name);
        ctx.insert("email", self.email.as_ref());
        ctx.insert("phone", &self.phone);
        ctx.insert("subject", subject);
        ctx.insert("message", &self.message);

        // Replies from the inbox go straight to whoever wrote in.
        let organization = renderer.to_organization(
            Self::KIND,
            format!("Νέο Μήνυμα Επικοινωνίας - {subject}"),
            renderer.render("emails/contact_organization.html", &ctx)?,
            Some(self.email.clone()),
        );
        let confirmation = renderer.to_applicant(
            Self::KIND,
            &self.email,
            "Λάβαμε το μήνυμά σας".to_string(),
            renderer.render("emails/contact_confirmation.html", &ctx)?,
        );

        Ok(Notifications {
            organization,
            confirmation,
        })
    }
}
