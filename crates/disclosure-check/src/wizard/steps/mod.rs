//! Draft-and-commit flow for the thirteen wizard screens.
//!
//! Every screen edits a local draft, validates it with the shared validators,
//! and only then commits section patches into the [`FormSession`]. The
//! [`submit`] gate makes that ordering impossible to skip: a draft with
//! findings never touches the session.

mod additional;
mod address_history;
mod billing;
mod current_address;
mod declarations;
mod delivery;
mod documents;
mod personal;

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::wizard::session::FormSession;
use crate::wizard::validation::ValidationError;

pub use additional::AdditionalDetailsForm;
pub use address_history::{
    save_previous_address, PreviousAddressDraft, SaveAddressError, SavedAddress,
};
pub use billing::CardholderDetailsForm;
pub use current_address::{CurrentAddressForm, ResidencyDateForm};
pub use declarations::DeclarationsForm;
pub use delivery::DeliveryDetailsForm;
pub use documents::{is_known_document, DocumentSelectionForm, DOCUMENT_TYPES};
pub use personal::PersonalDetailsForm;

/// The thirteen screens of the disclosure application, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    PersonalDetails,
    AdditionalDetails,
    CurrentAddress,
    ResidencyDate,
    AddressHistory,
    DeliveryDetails,
    Summary,
    DocumentSelection,
    DocumentUpload,
    Declarations,
    CardholderDetails,
    Payment,
    Confirmation,
}

impl WizardStep {
    pub const COUNT: u8 = 13;

    pub const fn number(self) -> u8 {
        match self {
            WizardStep::PersonalDetails => 1,
            WizardStep::AdditionalDetails => 2,
            WizardStep::CurrentAddress => 3,
            WizardStep::ResidencyDate => 4,
            WizardStep::AddressHistory => 5,
            WizardStep::DeliveryDetails => 6,
            WizardStep::Summary => 7,
            WizardStep::DocumentSelection => 8,
            WizardStep::DocumentUpload => 9,
            WizardStep::Declarations => 10,
            WizardStep::CardholderDetails => 11,
            WizardStep::Payment => 12,
            WizardStep::Confirmation => 13,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            WizardStep::PersonalDetails => "Personal details",
            WizardStep::AdditionalDetails => "Additional details",
            WizardStep::CurrentAddress => "Current address",
            WizardStep::ResidencyDate => "Time at current address",
            WizardStep::AddressHistory => "Address history",
            WizardStep::DeliveryDetails => "Delivery details",
            WizardStep::Summary => "Summary",
            WizardStep::DocumentSelection => "Identity documents",
            WizardStep::DocumentUpload => "Document upload",
            WizardStep::Declarations => "Declarations",
            WizardStep::CardholderDetails => "Cardholder details",
            WizardStep::Payment => "Payment",
            WizardStep::Confirmation => "Confirmation",
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            WizardStep::PersonalDetails => Some(WizardStep::AdditionalDetails),
            WizardStep::AdditionalDetails => Some(WizardStep::CurrentAddress),
            WizardStep::CurrentAddress => Some(WizardStep::ResidencyDate),
            WizardStep::ResidencyDate => Some(WizardStep::AddressHistory),
            WizardStep::AddressHistory => Some(WizardStep::DeliveryDetails),
            WizardStep::DeliveryDetails => Some(WizardStep::Summary),
            WizardStep::Summary => Some(WizardStep::DocumentSelection),
            WizardStep::DocumentSelection => Some(WizardStep::DocumentUpload),
            WizardStep::DocumentUpload => Some(WizardStep::Declarations),
            WizardStep::Declarations => Some(WizardStep::CardholderDetails),
            WizardStep::CardholderDetails => Some(WizardStep::Payment),
            WizardStep::Payment => Some(WizardStep::Confirmation),
            WizardStep::Confirmation => None,
        }
    }

    pub const fn back(self) -> Option<Self> {
        match self {
            WizardStep::PersonalDetails => None,
            WizardStep::AdditionalDetails => Some(WizardStep::PersonalDetails),
            WizardStep::CurrentAddress => Some(WizardStep::AdditionalDetails),
            WizardStep::ResidencyDate => Some(WizardStep::CurrentAddress),
            WizardStep::AddressHistory => Some(WizardStep::ResidencyDate),
            WizardStep::DeliveryDetails => Some(WizardStep::AddressHistory),
            WizardStep::Summary => Some(WizardStep::DeliveryDetails),
            WizardStep::DocumentSelection => Some(WizardStep::Summary),
            WizardStep::DocumentUpload => Some(WizardStep::DocumentSelection),
            WizardStep::Declarations => Some(WizardStep::DocumentUpload),
            WizardStep::CardholderDetails => Some(WizardStep::Declarations),
            WizardStep::Payment => Some(WizardStep::CardholderDetails),
            WizardStep::Confirmation => Some(WizardStep::Payment),
        }
    }
}

/// Validation findings keyed by field name. Serializes as a flat map of
/// field to user-facing message so the router can return it verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validator outcome against a field; `Ok` is a no-op.
    pub fn check(&mut self, field: &'static str, outcome: Result<(), ValidationError>) {
        if let Err(error) = outcome {
            self.0.insert(field, error);
        }
    }

    pub fn push(&mut self, field: &'static str, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ValidationError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field, &error.to_string())?;
        }
        map.end()
    }
}

/// A screen's editable draft: validated first, committed only when clean.
pub trait StepForm {
    fn step(&self) -> WizardStep;

    /// Run every field rule; an empty result allows forward navigation.
    fn validate(&self) -> FieldErrors;

    /// Write the draft into the session. Only called after a clean
    /// [`StepForm::validate`].
    fn commit(self, session: &mut FormSession);
}

/// Validate a draft and commit it, leaving the session untouched when any
/// finding remains.
pub fn submit<F: StepForm>(session: &mut FormSession, form: F) -> Result<(), FieldErrors> {
    let errors = form.validate();
    if errors.is_empty() {
        tracing::debug!(step = form.step().title(), "step committed");
        form.commit(session);
        Ok(())
    } else {
        tracing::debug!(
            step = form.step().title(),
            findings = errors.len(),
            "step rejected"
        );
        Err(errors)
    }
}
