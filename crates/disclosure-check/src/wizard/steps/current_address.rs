use serde::Deserialize;

use super::{FieldErrors, StepForm, WizardStep};
use crate::wizard::session::{
    CurrentAddressPatch, FormSession, PartialDate, PostalAddress, SectionPatch,
};
use crate::wizard::validation;

/// Step 3 draft: the applicant's current home address.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentAddressForm {
    #[serde(flatten)]
    pub address: PostalAddress,
}

impl StepForm for CurrentAddressForm {
    fn step(&self) -> WizardStep {
        WizardStep::CurrentAddress
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "addressLine1",
            validation::required(&self.address.address_line1, "Address line 1"),
        );
        errors.check(
            "townCity",
            validation::required(&self.address.town_city, "Town/city"),
        );
        errors.check(
            "country",
            validation::required(&self.address.country, "Country"),
        );
        errors.check("postcode", validation::postcode(&self.address.postcode));
        errors
    }

    fn commit(self, session: &mut FormSession) {
        // Merge keeps any livedSince already captured on the residency step.
        session.update_section(SectionPatch::CurrentAddress(CurrentAddressPatch {
            address: self.address.into(),
            lived_since: None,
        }));
    }
}

/// Step 4 draft: how long the applicant has lived at the current address.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResidencyDateForm {
    pub lived_since: PartialDate,
}

impl StepForm for ResidencyDateForm {
    fn step(&self) -> WizardStep {
        WizardStep::ResidencyDate
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("livedSince", validation::date(&self.lived_since));
        errors
    }

    fn commit(self, session: &mut FormSession) {
        // Merge keeps the address lines captured on the previous step.
        session.update_section(SectionPatch::CurrentAddress(CurrentAddressPatch {
            address: Default::default(),
            lived_since: Some(self.lived_since),
        }));
    }
}
