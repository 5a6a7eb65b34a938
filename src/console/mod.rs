//! Console wizard
//!
//! Runs the signup flow as a sequence of line prompts, for terminals where
//! the full-screen interface is unavailable or unwanted.

pub mod steps;
pub mod view;
pub mod wizard;

pub use view::ConsoleView;
pub use wizard::{ConsoleWizard, Prompter, SessionOutcome};
