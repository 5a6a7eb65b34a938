//! Tracing setup
//!
//! Command-line commands log to stderr. The TUI owns the terminal, so while
//! it runs events go to a log file in the config directory instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{SignupError, SignupResult};

/// Where log events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Build the filter: `RUST_LOG` when set, otherwise the configured level
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// Calling this twice is harmless; the second subscriber is dropped.
pub fn init_logging(default_level: &str, target: LogTarget<'_>) -> SignupResult<()> {
    let filter = env_filter(default_level);

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .without_time()
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    SignupError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bad_level_falls_back() {
        let filter = env_filter("not a [valid directive");
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn test_file_target_creates_log() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("signup.log");

        init_logging("debug", LogTarget::File(&path)).unwrap();
        assert!(path.exists());
    }
}
