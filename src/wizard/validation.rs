//! Per-step validation
//!
//! Contact fields are validated together in one pass so every problem is
//! reported at once. The plan step has a single rule: a plan must be chosen.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

use crate::error::SignupError;
use crate::models::{Contact, ContactField};

/// Message for an empty required field
pub const REQUIRED: &str = "This field is required";

/// Message for a present but malformed email address
pub const INVALID_EMAIL: &str = "Invalid email format";

/// Message shown when leaving the plan step without a plan
pub const PLAN_REQUIRED: &str = "Please select a plan";

/// Why a step transition was refused
#[derive(Debug, Error)]
pub enum StepError {
    /// One or more contact fields failed validation
    #[error("{0}")]
    Contact(FieldErrors),

    /// No plan was selected on the plan step
    #[error("{}", PLAN_REQUIRED)]
    PlanRequired,

    /// The controller state could not support the transition
    #[error(transparent)]
    State(#[from] SignupError),
}

impl StepError {
    /// Field errors, if this is a contact failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Contact(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Field → message for every contact field that failed validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for one field, if it failed
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: ContactField, message: &'static str) {
        self.0.insert(field, message);
    }

    /// Clear one field's error, returning whether there was one
    pub fn remove(&mut self, field: ContactField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Check an address has the `local@domain.tld` shape
///
/// # Examples
/// ```
/// use signup::wizard::validation::is_valid_email;
/// assert!(is_valid_email("stephen@lorem.com"));
/// assert!(!is_valid_email("stephen@lorem"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Validate a single contact value
///
/// Blank values count as missing. The email shape is checked on the value as
/// typed, so surrounding whitespace makes an address invalid.
pub fn validate_field(field: ContactField, value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some(REQUIRED);
    }
    if field == ContactField::Email && !is_valid_email(value) {
        return Some(INVALID_EMAIL);
    }
    None
}

/// Validate all three contact fields, returning the trimmed values on success
pub fn validate_contact(input: &Contact) -> Result<Contact, FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in ContactField::ALL {
        if let Some(message) = validate_field(field, input.get(field)) {
            errors.insert(field, message);
        }
    }

    if errors.is_empty() {
        Ok(input.trimmed())
    } else {
        Err(errors)
    }
}
