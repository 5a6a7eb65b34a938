//! Billing cycle model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing period applied uniformly to the plan and every add-on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    /// Parse a billing cycle from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" | "mo" => Some(Self::Monthly),
            "yearly" | "year" | "yr" | "annual" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// The other cycle
    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    /// Capitalized name used in the plan line (`Monthly`, `Yearly`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Suffix used in price tags (`mo`, `yr`)
    pub fn short(&self) -> &'static str {
        match self {
            Self::Monthly => "mo",
            Self::Yearly => "yr",
        }
    }

    /// Period noun used in the total label (`month`, `year`)
    pub fn period(&self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_monthly() {
        assert_eq!(BillingCycle::default(), BillingCycle::Monthly);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(BillingCycle::Monthly.toggled(), BillingCycle::Yearly);
        assert_eq!(BillingCycle::Yearly.toggled(), BillingCycle::Monthly);
    }

    #[test]
    fn test_parse() {
        assert_eq!(BillingCycle::parse("Yearly"), Some(BillingCycle::Yearly));
        assert_eq!(BillingCycle::parse("mo"), Some(BillingCycle::Monthly));
        assert_eq!(BillingCycle::parse("weekly"), None);
    }
}
