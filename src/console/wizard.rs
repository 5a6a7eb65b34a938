//! Console wizard orchestration
//!
//! Drives a [`WizardController`] from line input until the signup is
//! confirmed or the input ends.

use std::io::{BufRead, Write};

use tracing::info;

use crate::error::SignupResult;
use crate::models::{FormState, PricingTable, Step};
use crate::wizard::summary::Summary;
use crate::wizard::WizardController;

use super::steps::{self, Flow};
use super::view::ConsoleView;

/// How a console session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Signup confirmed with this breakdown
    Completed(Summary),
    /// Input ended before confirmation
    Cancelled,
}

/// Line input and output for the prompts
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    pub fn prompt(&mut self, text: &str) -> SignupResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print one line
    pub fn say(&mut self, line: &str) -> SignupResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// The console wizard state machine
pub struct ConsoleWizard<R, W> {
    controller: WizardController<ConsoleView>,
    io: Prompter<R, W>,
}

impl<R: BufRead, W: Write> ConsoleWizard<R, W> {
    /// Create a wizard starting from `state`
    pub fn new(
        pricing: PricingTable,
        state: FormState,
        currency_symbol: &str,
        input: R,
        output: W,
    ) -> Self {
        let view = ConsoleView::new(currency_symbol);
        Self {
            controller: WizardController::with_state(view, pricing, state),
            io: Prompter::new(input, output),
        }
    }

    /// Run the interactive wizard until confirmation or end of input
    pub fn run(&mut self) -> SignupResult<SessionOutcome> {
        self.io.say("")?;
        self.io.say("Welcome! Let's get your subscription set up.")?;
        self.io.say("Type 'back' to return to the previous step. Press Ctrl+D to cancel.")?;

        loop {
            self.flush_view()?;

            let flow = match self.controller.current_step() {
                Step::Info => steps::contact::run(&mut self.controller, &mut self.io)?,
                Step::Plan => steps::plan::run(&mut self.controller, &mut self.io)?,
                Step::AddOns => steps::addons::run(&mut self.controller, &mut self.io)?,
                Step::Summary => steps::confirm::run(&mut self.controller, &mut self.io)?,
                Step::Completed => {
                    let summary = self.controller.compute_summary()?;
                    return Ok(SessionOutcome::Completed(summary));
                }
            };

            if flow == Flow::Cancelled {
                self.flush_view()?;
                self.io.say("")?;
                self.io.say("Signup cancelled.")?;
                info!(step = self.controller.current_step().number(), "console signup cancelled");
                return Ok(SessionOutcome::Cancelled);
            }
        }
    }

    pub fn controller(&self) -> &WizardController<ConsoleView> {
        &self.controller
    }

    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    fn flush_view(&mut self) -> SignupResult<()> {
        for line in self.controller.view_mut().take_output() {
            self.io.say(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Addon, BillingCycle, Contact, Money, Plan};
    use std::io::Cursor;

    fn run_script(script: &str) -> (SessionOutcome, FormState, String) {
        let mut wizard = ConsoleWizard::new(
            PricingTable::builtin(),
            FormState::default(),
            "$",
            Cursor::new(script.to_string()),
            Vec::new(),
        );
        let outcome = wizard.run().unwrap();
        let state = wizard.controller().state().clone();
        let output = String::from_utf8(wizard.into_output()).unwrap();
        (outcome, state, output)
    }

    #[test]
    fn test_complete_signup() {
        let script = "\
Ada Lovelace
ada@example.com
555-0100
advanced
b

1
custom-profile


";
        let (outcome, state, output) = run_script(script);

        let SessionOutcome::Completed(summary) = outcome else {
            panic!("expected completion, got {:?}", outcome);
        };
        assert_eq!(summary.plan, Plan::Advanced);
        assert_eq!(summary.cycle, BillingCycle::Yearly);
        assert_eq!(summary.total, Money::from_units(150));
        assert_eq!(state.contact, Contact::new("Ada Lovelace", "ada@example.com", "555-0100"));
        assert_eq!(state.current_step, Step::Completed);
        assert!(output.contains("Total (per year)"));
        assert!(output.contains("Thank you!"));
    }

    #[test]
    fn test_invalid_contact_is_reprompted() {
        let script = "\
Ada

555
ada@example.com
";
        let (outcome, state, output) = run_script(script);

        assert_eq!(outcome, SessionOutcome::Cancelled);
        assert!(output.contains("! Email Address: This field is required"));
        assert_eq!(state.current_step, Step::Plan);
        assert_eq!(state.contact.email, "ada@example.com");
    }

    #[test]
    fn test_plan_required_and_change_plan() {
        let script = "\
Ada
ada@example.com
555

arcade


change
pro



";
        let (outcome, state, output) = run_script(script);

        assert!(output.contains("! Please select a plan"));
        assert!(matches!(outcome, SessionOutcome::Completed(_)));
        assert_eq!(state.selected_plan, Some(Plan::Pro));
        assert!(state.selected_addons.is_empty());
    }

    #[test]
    fn test_back_and_addon_toggle_off() {
        let script = "\
Ada
ada@example.com
555
1

online-service
back

2
online-service
";
        let (outcome, state, _) = run_script(script);

        assert_eq!(outcome, SessionOutcome::Cancelled);
        assert_eq!(state.current_step, Step::AddOns);
        assert!(!state.has_addon(Addon::OnlineService));
    }

    #[test]
    fn test_unknown_choice_is_reported() {
        let (_, state, output) = run_script("Ada\nada@example.com\n555\ngold\n");
        assert!(output.contains("Unknown plan: 'gold'"));
        assert_eq!(state.selected_plan, None);
    }

    #[test]
    fn test_eof_cancels_immediately() {
        let (outcome, state, output) = run_script("");
        assert_eq!(outcome, SessionOutcome::Cancelled);
        assert_eq!(state.current_step, Step::Info);
        assert!(output.contains("Signup cancelled."));
    }
}
