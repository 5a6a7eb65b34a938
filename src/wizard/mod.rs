//! The signup wizard core
//!
//! A linear state machine over four steps plus a terminal completed state,
//! with per-step validation and price computation. Rendering is delegated
//! to a [`View`].

pub mod controller;
pub mod summary;
pub mod validation;
pub mod view;

pub use controller::WizardController;
pub use summary::{compute_summary, AddonLine, PriceSheet, Summary};
pub use validation::{FieldErrors, StepError};
pub use view::{View, COMPLETION_MESSAGE};
