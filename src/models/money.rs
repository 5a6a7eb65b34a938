//! Money type for representing prices
//!
//! Internally stores amounts in cents (i64) so that price sums never touch
//! floating point. Catalog prices are whole currency units, but the type
//! keeps cents so a pricing file change never needs a new representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use signup::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.units(), 10);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use signup::models::Money;
    /// assert_eq!(Money::from_units(9).cents(), 900);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format with a currency symbol, dropping the fraction for whole amounts
    ///
    /// `$9`, `$10.50`, `-$3`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().abs();
        if self.cents_part() == 0 {
            format!("{}{}{}", sign, symbol, units)
        } else {
            format!("{}{}{}.{:02}", sign, symbol, units, self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let m = Money::from_units(12);
        assert_eq!(m.cents(), 1200);
        assert_eq!(m.units(), 12);
        assert_eq!(m.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(9)), "$9");
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{}", Money::from_cents(-300)), "-$3");
        assert_eq!(format!("{}", Money::zero()), "$0");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_units(150).format_with_symbol("€"), "€150");
    }

    #[test]
    fn test_sum() {
        let total: Money = [1, 2, 2].iter().map(|u| Money::from_units(*u)).sum();
        assert_eq!(total, Money::from_units(5));
    }

    #[test]
    fn test_add_assign() {
        let mut m = Money::from_units(120);
        m += Money::from_units(30);
        assert_eq!(m.units(), 150);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
