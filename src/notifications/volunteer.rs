use super::{FormKind, Notifications, Notify, Renderer};
use crate::domain::{Choice, EmailAddress, VolunteerApplication, joined_labels};

impl Notify for VolunteerApplication {
    const KIND: FormKind = FormKind::Volunteer;

    fn applicant_email(&self) -> &EmailAddress {
        &self.applicant.email
    }

    fn notifications(&self, renderer: &Renderer) -> Result<Notifications, anyhow::Error> {
        let interests: Vec<&str> = self.interests.iter().map(|role| role.label()).collect();

        let mut ctx = renderer.context(&self.submitted_at);
        ctx.insert("applicant", &self.applicant.full_name);
        ctx.insert("email", self.applicant.email.as_ref());
        ctx.insert("phone", &self.applicant.phone);
        ctx.insert("age", self.age.label());
        ctx.insert("city", &self.applicant.city);
        ctx.insert("availability", &joined_labels(&self.availability));
        ctx.insert("hours_per_week", self.hours_per_week.label());
        ctx.insert("interests", &interests);
        ctx.insert("has_experience", self.has_experience.label());
        ctx.insert("experience", &self.experience);
        ctx.insert("why_volunteer", &self.why_volunteer);
        ctx.insert("skills", &self.skills);

        let organization = renderer.to_organization(
            Self::KIND,
            format!("Νέα Αίτηση Εθελοντισμού - {}", self.applicant.full_name),
            renderer.render("emails/volunteer_organization.html", &ctx)?,
            None,
        );
        let confirmation = renderer.to_applicant(
            Self::KIND,
            &self.applicant.email,
            "Λάβαμε την αίτησή σου για εθελοντισμό".to_string(),
            renderer.render("emails/volunteer_confirmation.html", &ctx)?,
        );

        Ok(Notifications {
            organization,
            confirmation,
        })
    }
}
