//! `init` and `config` commands

use std::io::Write;

use tracing::info;

use crate::config::{Settings, SignupPaths};
use crate::error::SignupResult;
use crate::models::PricingTable;

/// Write default settings and a pricing template
///
/// Existing files are left alone unless `force` is set.
pub fn handle_init_command<W: Write>(
    paths: &SignupPaths,
    force: bool,
    out: &mut W,
) -> SignupResult<()> {
    if paths.is_initialized() && !force {
        writeln!(
            out,
            "Already initialized at {}. Use --force to overwrite.",
            paths.base_dir().display()
        )?;
        return Ok(());
    }

    writeln!(out, "Initializing signup wizard at: {}", paths.base_dir().display())?;
    paths.ensure_directories()?;

    Settings::default().save(paths)?;
    writeln!(out, "  wrote {}", paths.settings_file().display())?;

    let pricing_path = paths.pricing_file();
    if force || !pricing_path.exists() {
        let template = PricingTable::builtin().to_yaml_string()?;
        std::fs::write(&pricing_path, template)?;
        writeln!(out, "  wrote {}", pricing_path.display())?;
    }

    info!(dir = %paths.base_dir().display(), "initialized");
    writeln!(out)?;
    writeln!(out, "Initialization complete!")?;
    writeln!(
        out,
        "Set \"pricing_file\": \"pricing.yaml\" in config.json to use the template."
    )?;
    Ok(())
}

/// Show paths and active settings
pub fn handle_config_command<W: Write>(
    paths: &SignupPaths,
    settings: &Settings,
    out: &mut W,
) -> SignupResult<()> {
    writeln!(out, "Signup Wizard Configuration")?;
    writeln!(out, "===========================")?;
    writeln!(out, "Config directory: {}", paths.base_dir().display())?;
    writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
    writeln!(out, "Log file:         {}", paths.log_file().display())?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Currency symbol:       {}", settings.currency_symbol)?;
    writeln!(out, "  Default billing cycle: {}", settings.default_billing_cycle)?;
    writeln!(out, "  Log level:             {}", settings.log_level)?;
    match &settings.pricing_file {
        Some(path) => writeln!(out, "  Pricing file:          {}", path.display())?,
        None => writeln!(out, "  Pricing file:          (built-in)")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_files_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut out = Vec::new();
        handle_init_command(&paths, false, &mut out).unwrap();
        assert!(paths.settings_file().exists());
        assert!(paths.pricing_file().exists());
        assert_eq!(
            PricingTable::load(&paths.pricing_file()).unwrap(),
            PricingTable::builtin()
        );

        std::fs::write(paths.pricing_file(), "edited").unwrap();
        let mut out = Vec::new();
        handle_init_command(&paths, false, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Already initialized"));
        assert_eq!(std::fs::read_to_string(paths.pricing_file()).unwrap(), "edited");

        handle_init_command(&paths, true, &mut Vec::new()).unwrap();
        assert_ne!(std::fs::read_to_string(paths.pricing_file()).unwrap(), "edited");
    }

    #[test]
    fn test_config_output() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut out = Vec::new();
        handle_config_command(&paths, &Settings::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Default billing cycle: monthly"));
        assert!(text.contains("(built-in)"));
    }
}
