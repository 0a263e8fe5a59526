//! The disclosure wizard core: session state, validators, step flow, auth
//! contracts, and the HTTP surface.

pub mod auth;
pub mod router;
pub mod session;
pub mod steps;
pub mod validation;

#[cfg(test)]
mod tests;

pub use router::{shared_session, wizard_router, SharedSession};
pub use session::{
    AddressId, AddressWrite, CurrentAddress, Declarations, FormSession, PartialDate,
    PostalAddress, PreviousAddress, PreviousAddressForm, SectionPatch, SessionError,
};
pub use steps::{FieldErrors, StepForm, WizardStep};
pub use validation::ValidationError;
