use serde::Deserialize;

use super::{FieldErrors, StepForm, WizardStep};
use crate::wizard::session::{FormSession, PartialDate};
use crate::wizard::validation::ValidationError;

/// Step 10 draft: the single confirmation checkbox and the declaration date.
///
/// Committing confirms all seven declaration flags together; the session
/// never holds a partially confirmed set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeclarationsForm {
    pub confirmed: bool,
    pub declaration_date: PartialDate,
}

impl StepForm for DeclarationsForm {
    fn step(&self) -> WizardStep {
        WizardStep::Declarations
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !self.confirmed {
            errors.push("confirmation", ValidationError::ConfirmationRequired);
        }
        if self.declaration_date.day.trim().is_empty()
            || self.declaration_date.month.trim().is_empty()
            || self.declaration_date.year.trim().is_empty()
        {
            errors.push("date", ValidationError::InvalidDate);
        }
        errors
    }

    fn commit(self, session: &mut FormSession) {
        session.confirm_declarations();
    }
}
