//! Subscription plan model
//!
//! The three base plans a subscriber picks from on the plan step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A base subscription plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Arcade,
    Advanced,
    Pro,
}

impl Plan {
    /// All plans, in the order they are presented
    pub const ALL: [Plan; 3] = [Plan::Arcade, Plan::Advanced, Plan::Pro];

    /// The plan identifier (`arcade`, `advanced`, `pro`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arcade => "arcade",
            Self::Advanced => "advanced",
            Self::Pro => "pro",
        }
    }

    /// Parse a plan from its identifier (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "arcade" => Some(Self::Arcade),
            "advanced" => Some(Self::Advanced),
            "pro" => Some(Self::Pro),
            _ => None,
        }
    }

    /// Position of this plan in [`Plan::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Arcade => 0,
            Self::Advanced => 1,
            Self::Pro => 2,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
