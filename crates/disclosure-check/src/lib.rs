//! Form session aggregation and per-step validation for a thirteen-screen
//! disclosure application wizard.
//!
//! The session accumulates partial input as the applicant moves through the
//! screens; each screen validates its local draft with the shared validators
//! and commits section patches only when clean. Everything outside that flow
//! (page rendering, payment simulation, uploads) lives with the callers.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod wizard;
