//! Core data models for the signup wizard
//!
//! Plans, add-ons, billing cycles, contact details, prices, and the form
//! state that ties them together for one session.

pub mod addon;
pub mod billing;
pub mod contact;
pub mod form_state;
pub mod money;
pub mod plan;
pub mod pricing;

pub use addon::Addon;
pub use billing::BillingCycle;
pub use contact::{Contact, ContactField};
pub use form_state::{FormState, Step};
pub use money::Money;
pub use plan::Plan;
pub use pricing::{Price, PricingTable};
