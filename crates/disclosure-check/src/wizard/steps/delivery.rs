use serde::Deserialize;

use super::{FieldErrors, StepForm, WizardStep};
use crate::wizard::session::{FormSession, PostalAddress, SectionPatch};

/// Step 6 draft: certificate format and where to post it.
///
/// The screen has no blocking rules; the delivery address is stored even when
/// shadowed by the current address so switching the answer back does not lose
/// what was typed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryDetailsForm {
    pub paper_certificate: bool,
    pub send_to_current_address: bool,
    pub delivery_address: PostalAddress,
}

impl Default for DeliveryDetailsForm {
    fn default() -> Self {
        Self {
            paper_certificate: false,
            send_to_current_address: true,
            delivery_address: PostalAddress::default(),
        }
    }
}

impl StepForm for DeliveryDetailsForm {
    fn step(&self) -> WizardStep {
        WizardStep::DeliveryDetails
    }

    fn validate(&self) -> FieldErrors {
        FieldErrors::new()
    }

    fn commit(self, session: &mut FormSession) {
        session.update_section(SectionPatch::PaperCertificate(self.paper_certificate));
        session.update_section(SectionPatch::SendToCurrentAddress(
            self.send_to_current_address,
        ));
        session.update_section(SectionPatch::DeliveryAddress(self.delivery_address.into()));
    }
}
