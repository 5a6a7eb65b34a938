//! User settings for the signup wizard
//!
//! Display and startup preferences. Stored as JSON in `config.json`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::SignupPaths;
use crate::error::SignupError;
use crate::models::{BillingCycle, PricingTable};

/// User settings for the signup wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Symbol prefixed to every displayed price
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Billing cycle a new session starts with
    #[serde(default)]
    pub default_billing_cycle: BillingCycle,

    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pricing table to load instead of the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_billing_cycle: BillingCycle::default(),
            log_level: default_log_level(),
            pricing_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SignupPaths) -> Result<Self, SignupError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SignupError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SignupError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SignupPaths) -> Result<(), SignupError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SignupError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SignupError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the pricing table for this run
    ///
    /// An explicit `override_path` wins over `pricing_file`. Relative paths
    /// in the settings are taken relative to the config directory.
    pub fn load_pricing(
        &self,
        paths: &SignupPaths,
        override_path: Option<&std::path::Path>,
    ) -> Result<PricingTable, SignupError> {
        if let Some(path) = override_path {
            return PricingTable::load(path);
        }

        match &self.pricing_file {
            Some(path) if path.is_relative() => PricingTable::load(&paths.base_dir().join(path)),
            Some(path) => PricingTable::load(path),
            None => Ok(PricingTable::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Plan};
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_billing_cycle, BillingCycle::Monthly);
        assert_eq!(settings.log_level, "warn");
        assert!(settings.pricing_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            default_billing_cycle: BillingCycle::Yearly,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_billing_cycle":"yearly"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_billing_cycle, BillingCycle::Yearly);
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(SignupError::Config(_))
        ));
    }

    #[test]
    fn test_load_pricing_relative_to_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().to_path_buf());
        let yaml = PricingTable::builtin()
            .to_yaml_string()
            .unwrap()
            .replace("monthly: 9", "monthly: 11");
        std::fs::write(paths.pricing_file(), yaml).unwrap();

        let settings = Settings {
            pricing_file: Some(PathBuf::from("pricing.yaml")),
            ..Settings::default()
        };
        let table = settings.load_pricing(&paths, None).unwrap();
        assert_eq!(table.plan_price(Plan::Arcade, BillingCycle::Monthly), Money::from_units(11));

        let builtin = Settings::default().load_pricing(&paths, None).unwrap();
        assert_eq!(builtin, PricingTable::builtin());
    }
}
