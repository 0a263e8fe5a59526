use serde::Deserialize;

use super::{FieldErrors, StepForm, WizardStep};
use crate::wizard::session::{FormSession, SectionPatch};

/// Identity document types the application accepts, as listed on the
/// selection screen.
pub const DOCUMENT_TYPES: &[&str] = &[
    "originalBirth",
    "certifiedBirth",
    "longFormBirth",
    "adoptionCert",
    "passport",
    "irishPassportCard",
    "drivingLicencePhoto",
    "drivingLicenceFull",
    "drivingLicencePaper",
    "visaShare",
    "utilityBill",
    "benefitStatement",
    "officialGovDoc",
    "healthInsurance",
    "eeaNationalId",
    "smartPass",
    "yLink",
    "passAccreditation",
    "teacherLetter",
    "sponsorshipLetter",
    "exceptionalCircs",
];

pub fn is_known_document(id: &str) -> bool {
    DOCUMENT_TYPES.contains(&id)
}

/// Step 8 draft: which identity documents will be provided, plus the eVisa
/// share code when "visaShare" is among them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentSelectionForm {
    pub selected_documents: Vec<String>,
    pub visa_share_code: String,
}

impl StepForm for DocumentSelectionForm {
    fn step(&self) -> WizardStep {
        WizardStep::DocumentSelection
    }

    fn validate(&self) -> FieldErrors {
        FieldErrors::new()
    }

    fn commit(self, session: &mut FormSession) {
        session.update_section(SectionPatch::SelectedDocuments(self.selected_documents));
        session.update_section(SectionPatch::VisaShareCode(self.visa_share_code));
    }
}
