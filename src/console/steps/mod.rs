//! Console wizard steps
//!
//! Each step handles one round of input for the step the controller is on.

pub mod addons;
pub mod confirm;
pub mod contact;
pub mod plan;

use crate::error::SignupResult;
use crate::models::Step;
use crate::wizard::StepError;

/// Whether the session goes on after a round of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Cancelled,
}

/// Accept a refused transition, the view has already shown why
pub(crate) fn settle(result: Result<Step, StepError>) -> SignupResult<Flow> {
    match result {
        Ok(_) | Err(StepError::Contact(_)) | Err(StepError::PlanRequired) => Ok(Flow::Continue),
        Err(StepError::State(err)) => Err(err),
    }
}

/// Commands shared by the selection steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Continue,
    Back,
    ToggleBilling,
    Choice(String),
}

impl Command {
    pub(crate) fn parse(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "" => Self::Continue,
            "back" => Self::Back,
            "b" | "billing" => Self::ToggleBilling,
            _ => Self::Choice(input.to_string()),
        }
    }
}

/// Resolve a 1-based menu number or a name against a list
pub(crate) fn pick<T: Copy>(choice: &str, items: &[T], parse: fn(&str) -> Option<T>) -> Option<T> {
    match choice.parse::<usize>() {
        Ok(n) if (1..=items.len()).contains(&n) => Some(items[n - 1]),
        Ok(_) => None,
        Err(_) => parse(choice),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Plan;

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse(""), Command::Continue);
        assert_eq!(Command::parse("BACK"), Command::Back);
        assert_eq!(Command::parse("b"), Command::ToggleBilling);
        assert_eq!(Command::parse("Pro"), Command::Choice("Pro".into()));
    }

    #[test]
    fn test_pick() {
        assert_eq!(pick("2", &Plan::ALL, Plan::parse), Some(Plan::Advanced));
        assert_eq!(pick("pro", &Plan::ALL, Plan::parse), Some(Plan::Pro));
        assert_eq!(pick("4", &Plan::ALL, Plan::parse), None);
        assert_eq!(pick("0", &Plan::ALL, Plan::parse), None);
    }
}
