//! Configuration module for the signup wizard
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SignupPaths;
pub use settings::Settings;
