use serde::Deserialize;

use super::{FieldErrors, StepForm, WizardStep};
use crate::wizard::session::{FormSession, PostalAddress, SectionPatch};
use crate::wizard::validation;

/// Step 11 draft: whether the cardholder address matches the current address,
/// and the billing address when it does not.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardholderDetailsForm {
    pub same_as_current: bool,
    pub cardholder_address: PostalAddress,
}

impl Default for CardholderDetailsForm {
    fn default() -> Self {
        Self {
            same_as_current: true,
            cardholder_address: PostalAddress::default(),
        }
    }
}

impl StepForm for CardholderDetailsForm {
    fn step(&self) -> WizardStep {
        WizardStep::CardholderDetails
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !self.same_as_current {
            errors.check(
                "addressLine1",
                validation::required(&self.cardholder_address.address_line1, "Address line 1"),
            );
            errors.check(
                "townCity",
                validation::required(&self.cardholder_address.town_city, "Town/city"),
            );
            errors.check(
                "country",
                validation::required(&self.cardholder_address.country, "Country"),
            );
        }
        errors
    }

    fn commit(self, session: &mut FormSession) {
        // The flag goes last so its copy-on-set sync wins when the billing
        // address matches the current one.
        session.update_section(SectionPatch::CardholderAddress(
            self.cardholder_address.into(),
        ));
        session.update_section(SectionPatch::CardholderAddressSame(self.same_as_current));
    }
}
