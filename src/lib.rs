//! Signup Wizard - terminal multi-step subscription signup
//!
//! This library provides the core of a four-step signup flow: personal
//! info, plan selection, add-ons, and a confirmed summary. The flow is a
//! small state machine with validation gates between steps and a pricing
//! engine for monthly and yearly billing.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (plans, add-ons, prices, form state)
//! - `wizard`: The controller, validation, summaries and the `View` trait
//! - `display`: Plain-text formatting of prices and summaries
//! - `export`: JSON and YAML quote output
//! - `console`: Line-prompt rendering of the wizard
//! - `tui`: Full-screen rendering of the wizard
//! - `cli`: Non-interactive command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use signup::models::{Plan, PricingTable};
//! use signup::wizard::WizardController;
//!
//! let mut wizard = WizardController::new(my_view, PricingTable::builtin());
//! wizard.advance()?;
//! wizard.select_plan(Plan::Pro);
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod tui;
pub mod wizard;

pub use error::{SignupError, SignupResult};
