//! Application state for the TUI
//!
//! [`App`] owns the wizard controller; [`TuiView`] is the view it drives and
//! holds everything the render functions read.

use crate::config::settings::Settings;
use crate::models::{Contact, ContactField, FormState, PricingTable, Step};
use crate::wizard::summary::{PriceSheet, Summary};
use crate::wizard::validation::FieldErrors;
use crate::wizard::{View, WizardController};

use super::widgets::TextInput;

/// Screen state mirrored from the controller plus local cursors
#[derive(Debug, Clone)]
pub struct TuiView {
    /// Name, email and phone inputs, in form order
    pub inputs: [TextInput; 3],
    /// Field receiving typed characters on the info step
    pub focused_field: ContactField,
    pub plan_error: Option<String>,
    pub sheet: Option<PriceSheet>,
    pub selection: FormState,
    /// Step panel currently shown
    pub visible_step: Step,
    pub summary: Option<Summary>,
    /// Highlighted plan card
    pub plan_cursor: usize,
    /// Highlighted add-on row
    pub addon_cursor: usize,
}

impl TuiView {
    pub fn new() -> Self {
        let inputs = ContactField::ALL.map(|field| {
            TextInput::new()
                .label(field.label())
                .placeholder(field.placeholder())
        });
        let mut view = Self {
            inputs,
            focused_field: ContactField::Name,
            plan_error: None,
            sheet: None,
            selection: FormState::default(),
            visible_step: Step::Info,
            summary: None,
            plan_cursor: 0,
            addon_cursor: 0,
        };
        view.sync_focus();
        view
    }

    pub fn input(&self, field: ContactField) -> &TextInput {
        &self.inputs[field_index(field)]
    }

    pub fn input_mut(&mut self, field: ContactField) -> &mut TextInput {
        &mut self.inputs[field_index(field)]
    }

    /// Input currently receiving keystrokes
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        let field = self.focused_field;
        self.input_mut(field)
    }

    pub fn focus(&mut self, field: ContactField) {
        self.focused_field = field;
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        for field in ContactField::ALL {
            let focused = field == self.focused_field;
            self.input_mut(field).focused = focused;
        }
    }
}

impl Default for TuiView {
    fn default() -> Self {
        Self::new()
    }
}

fn field_index(field: ContactField) -> usize {
    match field {
        ContactField::Name => 0,
        ContactField::Email => 1,
        ContactField::Phone => 2,
    }
}

impl View for TuiView {
    fn contact_input(&self) -> Contact {
        Contact::new(
            self.input(ContactField::Name).value(),
            self.input(ContactField::Email).value(),
            self.input(ContactField::Phone).value(),
        )
    }

    fn show_field_errors(&mut self, errors: &FieldErrors) {
        for field in ContactField::ALL {
            self.input_mut(field).error = errors.get(field).map(str::to_string);
        }
    }

    fn show_plan_error(&mut self, message: Option<&str>) {
        self.plan_error = message.map(str::to_string);
    }

    fn render_prices(&mut self, sheet: &PriceSheet) {
        self.sheet = Some(sheet.clone());
    }

    fn show_step(&mut self, step: Step) {
        self.visible_step = step;
        if step == Step::Plan {
            if let Some(plan) = self.selection.selected_plan {
                self.plan_cursor = plan.index();
            }
        }
    }

    fn show_completion(&mut self) {
        self.visible_step = Step::Completed;
    }

    fn reflect_selection(&mut self, state: &FormState) {
        self.selection = state.clone();
    }

    fn render_summary(&mut self, summary: &Summary) {
        self.summary = Some(summary.clone());
    }
}

/// Main application state
pub struct App {
    pub wizard: WizardController<TuiView>,

    /// Symbol prefixed to prices
    pub currency_symbol: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the help overlay is open
    pub show_help: bool,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(pricing: PricingTable, settings: &Settings) -> Self {
        let state = FormState::new(settings.default_billing_cycle);
        Self {
            wizard: WizardController::with_state(TuiView::new(), pricing, state),
            currency_symbol: settings.currency_symbol.clone(),
            should_quit: false,
            show_help: false,
            status_message: None,
        }
    }

    pub fn view(&self) -> &TuiView {
        self.wizard.view()
    }

    pub fn view_mut(&mut self) -> &mut TuiView {
        self.wizard.view_mut()
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
