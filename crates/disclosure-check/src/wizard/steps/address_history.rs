use serde::Deserialize;

use super::FieldErrors;
use crate::wizard::session::{AddressId, FormSession, PreviousAddressForm};
use crate::wizard::validation::{self, ValidationError};

/// Step 5 add/edit draft for one previous address. Carries an id only when
/// editing an existing entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviousAddressDraft {
    #[serde(flatten)]
    pub form: PreviousAddressForm,
}

impl PreviousAddressDraft {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "addressLine1",
            validation::required(&self.form.address.address_line1, "Address line 1"),
        );
        errors.check(
            "townCity",
            validation::required(&self.form.address.town_city, "Town/city"),
        );
        errors.check(
            "country",
            validation::required(&self.form.address.country, "Country"),
        );

        // Each date component is reported against its own field, matching the
        // screen's inline messages.
        if self.form.lived_from.day.trim().is_empty() {
            errors.push("livedFromDay", ValidationError::required("Day"));
        }
        if self.form.lived_from.month.trim().is_empty() {
            errors.push("livedFromMonth", ValidationError::required("Month"));
        }
        if self.form.lived_from.year.trim().is_empty() {
            errors.push("livedFromYear", ValidationError::required("Year"));
        }
        if self.form.lived_to.day.trim().is_empty() {
            errors.push("livedToDay", ValidationError::required("Day"));
        }
        if self.form.lived_to.month.trim().is_empty() {
            errors.push("livedToMonth", ValidationError::required("Month"));
        }
        if self.form.lived_to.year.trim().is_empty() {
            errors.push("livedToYear", ValidationError::required("Year"));
        }

        errors
    }
}

/// Which write the address history performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedAddress {
    Added(AddressId),
    Updated(AddressId),
}

impl SavedAddress {
    pub fn id(&self) -> &AddressId {
        match self {
            SavedAddress::Added(id) | SavedAddress::Updated(id) => id,
        }
    }
}

/// Why an address draft could not be saved.
#[derive(Debug, thiserror::Error)]
pub enum SaveAddressError {
    #[error("address draft has {} validation finding(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("no previous address with id '{}'", .0 .0)]
    UnknownId(AddressId),
}

/// Validate the draft, then add it to the history or replace the entry it
/// names. Editing an id that is no longer present is surfaced rather than
/// silently dropped.
pub fn save_previous_address(
    session: &mut FormSession,
    draft: PreviousAddressDraft,
) -> Result<SavedAddress, SaveAddressError> {
    let errors = draft.validate();
    if !errors.is_empty() {
        return Err(SaveAddressError::Invalid(errors));
    }

    match draft.form.id.clone() {
        Some(id) => {
            if session
                .update_previous_address(&id, draft.form)
                .applied()
            {
                Ok(SavedAddress::Updated(id))
            } else {
                Err(SaveAddressError::UnknownId(id))
            }
        }
        None => {
            let id = session.add_previous_address(draft.form);
            Ok(SavedAddress::Added(id))
        }
    }
}
