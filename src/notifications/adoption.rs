use super::{FormKind, Notifications, Notify, Renderer, animal_suffix};
use crate::domain::{AdoptionApplication, Choice, EmailAddress};

impl Notify for AdoptionApplication {
    const KIND: FormKind = FormKind::Adoption;

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
        ctx.insert("had_pets_before", self.had_pets_before.label());
        ctx.insert("current_pets", &self.current_pets);
        ctx.insert("work_schedule", &self.work_schedule);
        ctx.insert("who_will_care", &self.who_will_care);
        ctx.insert("why_adopt", &self.why_adopt);
        ctx.insert("animal_name", &self.animal.as_ref().map(|a| &a.name));
        ctx.insert(
            "animal_id",
            &self.animal.as_ref().and_then(|a| a.id.as_ref()),
        );

        let suffix = animal_suffix(self.animal.as_ref());
        let organization = renderer.to_organization(
            Self::KIND,
            format!("Νέα Αίτηση Υιοθεσίας{suffix}"),
            renderer.render("emails/adoption_organization.html", &ctx)?,
            None,
        );
        let confirmation = renderer.to_applicant(
            Self::KIND,
            &self.applicant.email,
            format!("Λάβαμε την αίτησή σας για υιοθεσία{suffix}"),
            renderer.render("emails/adoption_confirmation.html", &ctx)?,
        );

        Ok(Notifications {
            organization,
            confirmation,
        })
    }
}
