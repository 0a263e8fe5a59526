use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::domain::{AddressId, FormSession, PartialDate, PostalAddress, PreviousAddress};

static ADDRESS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_address_id() -> AddressId {
    let id = ADDRESS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AddressId(format!("addr-{id:06}"))
}

/// Input for creating or editing one previous-address entry. The id is absent
/// on first save and carried on edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviousAddressForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AddressId>,
    #[serde(flatten)]
    pub address: PostalAddress,
    pub lived_from: PartialDate,
    pub lived_to: PartialDate,
}

/// Result of a write against the address history. Not-found is surfaced so
/// the caller decides whether a missing id is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressWrite {
    Applied,
    NotFound,
}

impl AddressWrite {
    pub const fn applied(self) -> bool {
        matches!(self, AddressWrite::Applied)
    }
}

impl FormSession {
    /// Append an entry to the address history, generating an identifier when
    /// the form does not carry one. A supplied id that would collide with an
    /// existing entry is replaced with a fresh one; every stored id stays
    /// unique. Structurally identical addresses are permitted.
    pub fn add_previous_address(&mut self, form: PreviousAddressForm) -> AddressId {
        let id = match form.id {
            Some(id) if !self.has_previous_address(&id) => id,
            _ => {
                let mut generated = next_address_id();
                while self.has_previous_address(&generated) {
                    generated = next_address_id();
                }
                generated
            }
        };

        self.previous_addresses.push(PreviousAddress {
            id: id.clone(),
            address: form.address,
            lived_from: form.lived_from,
            lived_to: form.lived_to,
        });
        id
    }

    /// Remove the entry with the given id, leaving the order of the remaining
    /// entries untouched.
    #[must_use]
    pub fn remove_previous_address(&mut self, id: &AddressId) -> AddressWrite {
        let before = self.previous_addresses.len();
        self.previous_addresses.retain(|entry| entry.id != *id);
        if self.previous_addresses.len() == before {
            AddressWrite::NotFound
        } else {
            AddressWrite::Applied
        }
    }

    /// Replace the entry with the given id in place, preserving its position
    /// and identifier.
    #[must_use]
    pub fn update_previous_address(
        &mut self,
        id: &AddressId,
        form: PreviousAddressForm,
    ) -> AddressWrite {
        match self
            .previous_addresses
            .iter_mut()
            .find(|entry| entry.id == *id)
        {
            Some(entry) => {
                entry.address = form.address;
                entry.lived_from = form.lived_from;
                entry.lived_to = form.lived_to;
                AddressWrite::Applied
            }
            None => AddressWrite::NotFound,
        }
    }

    pub fn previous_address(&self, id: &AddressId) -> Option<&PreviousAddress> {
        self.previous_addresses.iter().find(|entry| entry.id == *id)
    }

    fn has_previous_address(&self, id: &AddressId) -> bool {
        self.previous_addresses.iter().any(|entry| entry.id == *id)
    }
}
