//! Line-oriented view
//!
//! Buffers everything the controller pushes as text lines. The wizard loop
//! drains the buffer to its writer after every action. Field errors are
//! printed by the contact step from the refused transition instead, since
//! the controller also re-sends them while fields are being edited.

use crate::display::format_summary;
use crate::models::{Contact, ContactField, FormState, Step};
use crate::wizard::summary::{PriceSheet, Summary};
use crate::wizard::{View, COMPLETION_MESSAGE};

pub struct ConsoleView {
    contact: Contact,
    symbol: String,
    sheet: Option<PriceSheet>,
    selection: FormState,
    pending: Vec<String>,
}

impl ConsoleView {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            contact: Contact::default(),
            symbol: currency_symbol.into(),
            sheet: None,
            selection: FormState::default(),
            pending: Vec::new(),
        }
    }

    /// Store the raw text typed for a field
    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.contact.name = value,
            ContactField::Email => self.contact.email = value,
            ContactField::Phone => self.contact.phone = value,
        }
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Latest prices, if the controller has rendered any
    pub fn sheet(&self) -> Option<&PriceSheet> {
        self.sheet.as_ref()
    }

    /// Selections as last reflected by the controller
    pub fn selection(&self) -> &FormState {
        &self.selection
    }

    /// Drain the buffered lines
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    fn push(&mut self, line: impl Into<String>) {
        self.pending.push(line.into());
    }

    fn heading(&mut self, title: String) {
        let underline = "=".repeat(title.chars().count());
        self.push("");
        self.push(title);
        self.push(underline);
    }
}

impl View for ConsoleView {
    fn contact_input(&self) -> Contact {
        self.contact.clone()
    }

    fn show_plan_error(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            self.push(format!("  ! {}", message));
        }
    }

    fn render_prices(&mut self, sheet: &PriceSheet) {
        self.sheet = Some(sheet.clone());
    }

    fn show_step(&mut self, step: Step) {
        self.heading(format!("Step {}: {}", step.number(), step.title()));
    }

    fn show_completion(&mut self) {
        self.heading(Step::Completed.title().to_string());
        self.push(COMPLETION_MESSAGE);
    }

    fn reflect_selection(&mut self, state: &FormState) {
        self.selection = state.clone();
    }

    fn render_summary(&mut self, summary: &Summary) {
        self.push("");
        let text = format_summary(summary, &self.symbol);
        for line in text.lines() {
            self.push(line.to_string());
        }
    }
}
