//! Add-on model
//!
//! Optional paid features attached to the base plan.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An optional add-on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Addon {
    OnlineService,
    LargerStorage,
    CustomProfile,
}

impl Addon {
    /// All add-ons, in the order they are presented
    pub const ALL: [Addon; 3] = [
        Addon::OnlineService,
        Addon::LargerStorage,
        Addon::CustomProfile,
    ];

    /// The hyphenated identifier (`online-service`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnlineService => "online-service",
            Self::LargerStorage => "larger-storage",
            Self::CustomProfile => "custom-profile",
        }
    }

    /// Parse an add-on from its identifier (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "online-service" => Some(Self::OnlineService),
            "larger-storage" => Some(Self::LargerStorage),
            "custom-profile" => Some(Self::CustomProfile),
            _ => None,
        }
    }

    /// Position of this add-on in [`Addon::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::OnlineService => 0,
            Self::LargerStorage => 1,
            Self::CustomProfile => 2,
        }
    }

    /// Short description shown next to the add-on checkbox
    pub fn description(&self) -> &'static str {
        match self {
            Self::OnlineService => "Access to multiplayer games",
            Self::LargerStorage => "Extra 1TB of cloud save",
            Self::CustomProfile => "Custom theme on your profile",
        }
    }
}

impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_identifier() {
        for addon in Addon::ALL {
            assert_eq!(Addon::parse(addon.as_str()), Some(addon));
        }
        assert_eq!(Addon::parse("extra-lives"), None);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Addon::LargerStorage).unwrap();
        assert_eq!(json, "\"larger-storage\"");
    }
}
