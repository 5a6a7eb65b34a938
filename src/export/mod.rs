//! Quote export
//!
//! Machine-readable output of a computed summary:
//! - JSON: for scripts
//! - YAML: human-readable
//!
//! The plain-text form lives in [`crate::display`].

pub mod json;
pub mod yaml;

pub use json::{export_quote_json, AddonExport, QuoteExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_quote_yaml;
