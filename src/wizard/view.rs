//! The view collaborator
//!
//! The controller never draws anything. It reads the contact inputs from a
//! [`View`] and pushes everything the view needs to display back into it.
//! Every push method has a no-op default so a view only implements what it
//! actually shows.

use crate::models::{Contact, FormState, Step};

use super::summary::{PriceSheet, Summary};
use super::validation::FieldErrors;

/// Body text of the completion panel
pub const COMPLETION_MESSAGE: &str = "Thanks for confirming your subscription! We hope you have fun \
using our platform. If you ever need support, please feel free to reach out.";

pub trait View {
    /// Current raw values of the three contact inputs
    fn contact_input(&self) -> Contact;

    /// Replace the field errors on display; an empty set clears them all
    fn show_field_errors(&mut self, _errors: &FieldErrors) {}

    /// Show (`Some`) or hide (`None`) the plan-step banner
    fn show_plan_error(&mut self, _message: Option<&str>) {}

    /// Prices and annotations for every plan and add-on card
    fn render_prices(&mut self, _sheet: &PriceSheet) {}

    /// Make one active step panel visible
    fn show_step(&mut self, _step: Step) {}

    /// Replace the step sequence with the completion panel
    fn show_completion(&mut self) {}

    /// Mirror selected plan, billing cycle and add-ons on the cards
    fn reflect_selection(&mut self, _state: &FormState) {}

    /// Fill in the summary panel
    fn render_summary(&mut self, _summary: &Summary) {}
}
