//! Display formatting for terminal output
//!
//! Provides utilities for formatting prices and summaries for the
//! command-line commands and the console wizard.

pub mod pricing;
pub mod summary;

pub use pricing::format_price_table;
pub use summary::format_summary;
