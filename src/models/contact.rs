//! Contact details collected on the first step

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three contact inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl ContactField {
    /// All fields, in form order
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Phone];

    /// Field label as shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
        }
    }

    /// Placeholder shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "e.g. Stephen King",
            Self::Email => "e.g. stephenking@lorem.com",
            Self::Phone => "e.g. +1 234 567 890",
        }
    }

    /// Next field in form order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Name,
        }
    }

    /// Previous field in form order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Email => Self::Name,
            Self::Phone => Self::Email,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// Name, email and phone
///
/// Used both for the raw values a view currently holds and for the trimmed
/// values stored in [`super::FormState`] once the first step validates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Create contact details from the three raw values
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Get the value of one field
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
        }
    }

    /// Copy with leading/trailing whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.email.trim(), self.phone.trim())
    }

    /// True while nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}
