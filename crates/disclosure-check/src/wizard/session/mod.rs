//! The form session: canonical in-progress application data plus controlled
//! mutation.
//!
//! [`domain`] holds the data model, [`aggregator`] the per-section write
//! operations, and [`addresses`] the previous-address collection. Steps never
//! reach into the session directly; they commit through these operations
//! after validating their drafts.

pub mod addresses;
pub mod aggregator;
pub mod domain;

pub use addresses::{AddressWrite, PreviousAddressForm};
pub use aggregator::{
    AddressPatch, CurrentAddressPatch, DatePatch, SectionPatch, SessionError,
};
pub use domain::{
    AddressId, CurrentAddress, Declarations, FormSession, PartialDate, PostalAddress,
    PreviousAddress,
};
