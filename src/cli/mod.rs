//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive CLI
//! commands, bridging the clap argument parsing with the wizard core.
//! Handlers write to a caller-supplied writer.

pub mod pricing;
pub mod quote;
pub mod setup;

pub use pricing::handle_pricing_command;
pub use quote::{handle_quote_command, OutputFormat, QuoteArgs};
pub use setup::{handle_config_command, handle_init_command};

use crate::error::SignupError;
use crate::models::BillingCycle;

/// Parse a billing cycle argument
pub fn parse_cycle(value: &str) -> Result<BillingCycle, SignupError> {
    BillingCycle::parse(value).ok_or_else(|| {
        SignupError::Validation(format!(
            "Invalid billing cycle: '{}'. Valid cycles: monthly, yearly",
            value
        ))
    })
}
