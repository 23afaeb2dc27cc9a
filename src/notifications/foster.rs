use super::{FormKind, Notifications, Notify, Renderer, animal_suffix};
use crate::domain::{Choice, EmailAddress, FosterApplication, joined_labels};

impl Notify for FosterApplication {
    const KIND: FormKind = FormKind::Foster;

    fn applicant_email(&self) -> &EmailAddress {
        &self.applicant.email
    }

    fn notifications(&self, renderer: &Renderer) -> Result<Notifications, anyhow::Error> {
        let mut ctx = renderer.context(&self.submitted_at);
        ctx.insert("applicant", &self.applicant.full_name);
        ctx.insert("email", self.applicant.email.as_ref());
        ctx.insert("phone", &self.applicant.phone);
        ctx.insert("address", &self.applicant.address);
        ctx.insert("city", &self.applicant.city);
        ctx.insert("housing_type", self.housing_type.label());
        ctx.insert("has_yard", self.has_yard.label());
        ctx.insert("foster_duration", self.foster_duration.label());
        ctx.insert("preferred_types", &joined_labels(&self.preferred_types));
        ctx.insert("can_handle_medical", self.can_handle_medical.label());
        ctx.insert("can_transport", self.can_transport.label());
        ctx.insert("had_pets_before", self.had_pets_before.label());
        ctx.insert("current_pets", &self.current_pets);
        ctx.insert("fostered_before", self.fostered_before.label());
        ctx.insert("work_schedule", &self.work_schedule);
        ctx.insert("why_foster", &self.why_foster);
        ctx.insert("animal_name", &self.animal.as_ref().map(|a| &a.name));
        ctx.insert(
            "animal_id",
            &self.animal.as_ref().and_then(|a| a.id.as_ref()),
        );

        let suffix = animal_suffix(self.animal.as_ref());
        let organization = renderer.to_organization(
            Self::KIND,
            format!("Νέα Αίτηση Φιλοξενίας{suffix}"),
            renderer.render("emails/foster_organization.html", &ctx)?,
            None,
        );
        let confirmation = renderer.to_applicant(
            Self::KIND,
            &self.applicant.email,
            format!("Λάβαμε την αίτησή σας για φιλοξενία{suffix}"),
            renderer.render("emails/foster_confirmation.html", &ctx)?,
        );

        Ok(Notifications {
            organization,
            confirmation,
        })
    }
}
