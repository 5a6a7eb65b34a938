//! Form state for one signup session

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::addon::Addon;
use super::billing::BillingCycle;
use super::contact::Contact;
use super::plan::Plan;

/// Wizard step
///
/// `Completed` is the terminal thank-you pseudo-step that follows a
/// confirmed summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    #[default]
    Info,
    Plan,
    AddOns,
    Summary,
    Completed,
}

impl Step {
    /// The active steps shown in the step indicator
    pub const ACTIVE: [Step; 4] = [Step::Info, Step::Plan, Step::AddOns, Step::Summary];

    /// 1-based step number (5 for `Completed`)
    pub fn number(&self) -> u8 {
        match self {
            Self::Info => 1,
            Self::Plan => 2,
            Self::AddOns => 3,
            Self::Summary => 4,
            Self::Completed => 5,
        }
    }

    /// Step for a 1-based number
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Info),
            2 => Some(Self::Plan),
            3 => Some(Self::AddOns),
            4 => Some(Self::Summary),
            5 => Some(Self::Completed),
            _ => None,
        }
    }

    /// Following step, `None` at `Completed`
    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Preceding step, `None` at `Info`
    pub fn prev(&self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1))
    }

    /// Heading shown at the top of the step panel
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Personal info",
            Self::Plan => "Select your plan",
            Self::AddOns => "Pick add-ons",
            Self::Summary => "Finishing up",
            Self::Completed => "Thank you!",
        }
    }

    /// Caption in the step indicator
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Info => "YOUR INFO",
            Self::Plan => "SELECT PLAN",
            Self::AddOns => "ADD-ONS",
            Self::Summary | Self::Completed => "SUMMARY",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

/// Everything the user has entered so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub current_step: Step,
    /// Trimmed contact details; empty until the first step validates
    pub contact: Contact,
    pub selected_plan: Option<Plan>,
    pub billing_cycle: BillingCycle,
    pub selected_addons: BTreeSet<Addon>,
}

impl FormState {
    /// Fresh state with the given default billing cycle
    pub fn new(billing_cycle: BillingCycle) -> Self {
        Self {
            billing_cycle,
            ..Default::default()
        }
    }

    /// Check whether an add-on is currently selected
    pub fn has_addon(&self, addon: Addon) -> bool {
        self.selected_addons.contains(&addon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers() {
        assert_eq!(Step::Info.number(), 1);
        assert_eq!(Step::Completed.number(), 5);
        assert_eq!(Step::from_number(3), Some(Step::AddOns));
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(6), None);
    }

    #[test]
    fn test_step_neighbours() {
        assert_eq!(Step::Info.prev(), None);
        assert_eq!(Step::AddOns.prev(), Some(Step::Plan));
        assert_eq!(Step::Summary.next(), Some(Step::Completed));
        assert_eq!(Step::Completed.next(), None);
    }

    #[test]
    fn test_default_state() {
        let state = FormState::default();
        assert_eq!(state.current_step, Step::Info);
        assert!(state.contact.is_empty());
        assert_eq!(state.selected_plan, None);
        assert_eq!(state.billing_cycle, BillingCycle::Monthly);
        assert!(state.selected_addons.is_empty());
    }

    #[test]
    fn test_new_with_cycle() {
        let state = FormState::new(BillingCycle::Yearly);
        assert_eq!(state.billing_cycle, BillingCycle::Yearly);
        assert_eq!(state.current_step, Step::Info);
    }
}
