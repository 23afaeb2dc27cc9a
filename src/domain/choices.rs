//! Enumerated form fields.
//!
//! Each type is a closed set of wire codes, and every code maps to the Greek
//! label shown in notification emails. Both mappings are exhaustive matches,
//! so adding a variant without a code or a label does not compile.

use validator::ValidationError;

use super::validation::{validate_choice, validate_choices};

pub trait Choice: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn code(self) -> &'static str;

    fn label(self) -> &'static str;

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.code() == code)
    }
}

macro_rules! choice {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $code:literal, $label:literal;)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl $name {
            pub fn validate_code(code: &str) -> Result<(), ValidationError> {
                validate_choice::<Self>(code)
            }

            pub fn validate_codes(codes: &[String]) -> Result<(), ValidationError> {
                validate_choices::<Self>(codes)
            }
        }
    };
}

choice!(
    HousingType {
        Apartment => "apartment", "Διαμέρισμα";
        House => "house", "Μονοκατοικία";
        Other => "other", "Άλλο";
    }
);

choice!(
    YesNo {
        Yes => "yes", "Ναι";
        No => "no", "Όχι";
    }
);

choice!(
    /// Whether a foster applicant has fostered before. "No" reads as a
    /// first-time foster in the notification.
    FosteredBefore {
        Yes => "yes", "Ναι";
        No => "no", "Όχι, πρώτη φορά";
    }
);

choice!(
    FosterDuration {
        OneToTwoWeeks => "1-2weeks", "1-2 εβδομάδες";
        OneMonth => "1month", "1 μήνα";
        TwoToThreeMonths => "2-3months", "2-3 μήνες";
        MoreThanThreeMonths => "3+months", "3+ μήνες";
        Flexible => "flexible", "Ευέλικτα";
    }
);

choice!(
    AnimalCategory {
        Puppies => "puppies", "Κουτάβια";
        AdultDogs => "adult-dogs", "Ενήλικοι σκύλοι";
        SeniorDogs => "senior-dogs", "Ηλικιωμένοι σκύλοι";
        Kittens => "kittens", "Γατάκια";
        AdultCats => "adult-cats", "Ενήλικες γάτες";
        SeniorCats => "senior-cats", "Ηλικιωμένες γάτες";
        SpecialNeeds => "special-needs", "Ειδικές ανάγκες";
    }
);

choice!(
    MedicalCare {
        Yes => "yes", "Ναι, άνετα";
        No => "no", "Όχι, προτιμώ υγιή ζώα";
        Depends => "depends", "Εξαρτάται από την περίπτωση";
    }
);

choice!(
    Transport {
        Yes => "yes", "Ναι, όποτε χρειαστεί";
        No => "no", "Όχι, χρειάζομαι βοήθεια";
        Sometimes => "sometimes", "Μερικές φορές";
    }
);

choice!(
    AgeBracket {
        Under18 => "under-18", "Κάτω από 18";
        From18To25 => "18-25", "18-25";
        From26To35 => "26-35", "26-35";
        From36To50 => "36-50", "36-50";
        Over50 => "50+", "50+";
    }
);

choice!(
    WeeklyHours {
        OneToTwo => "1-2", "1-2 ώρες";
        ThreeToFive => "3-5", "3-5 ώρες";
        SixToTen => "6-10", "6-10 ώρες";
        MoreThanTen => "10+", "10+ ώρες";
    }
);

choice!(
    Weekday {
        Monday => "monday", "Δευτέρα";
        Tuesday => "tuesday", "Τρίτη";
        Wednesday => "wednesday", "Τετάρτη";
        Thursday => "thursday", "Πέμπτη";
        Friday => "friday", "Παρασκευή";
        Saturday => "saturday", "Σάββατο";
        Sunday => "sunday", "Κυριακή";
    }
);

choice!(
    VolunteerRole {
        Fostering => "fostering", "Φιλοξενία ζώων";
        VetSupport => "vet-support", "Κτηνιατρική υποστήριξη";
        Events => "events", "Εκδηλώσεις & Υιοθεσίες";
        Photography => "photography", "Φωτογραφία & Media";
        SocialMedia => "social-media", "Social Media & Marketing";
        Admin => "admin", "Διοικητική υποστήριξη";
        Fundraising => "fundraising", "Συλλογή χρημάτων";
        Other => "other", "Άλλο";
    }
);

choice!(
    ContactSubject {
        General => "general", "Γενική ερώτηση";
        Adoption => "adoption", "Υιοθεσία";
        Foster => "foster", "Φιλοξενία";
        Volunteer => "volunteer", "Εθελοντισμός";
        Donation => "donation", "Δωρεά";
        Other => "other", "Άλλο";
    }
);

/// Labels of the given choices joined the way the notifications list them.
pub fn joined_labels<T: Choice>(choices: &[T]) -> String {
    choices
        .iter()
        .map(|choice| choice.label())
        .collect::<Vec<_>>()
        .join(", ")
}
