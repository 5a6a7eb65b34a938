//! Wizard controller
//!
//! Owns the [`FormState`] for one session and is the only thing that
//! mutates it. Every user action maps to one method; each completes before
//! the next action is handled.

use tracing::{debug, info, warn};

use crate::error::{SignupError, SignupResult};
use crate::models::{Addon, BillingCycle, ContactField, FormState, Plan, PricingTable, Step};

use super::summary::{compute_summary, PriceSheet, Summary};
use super::validation::{validate_contact, FieldErrors, StepError, PLAN_REQUIRED};
use super::view::View;

/// Drives step transitions, validation and pricing for one signup session
pub struct WizardController<V: View> {
    state: FormState,
    pricing: PricingTable,
    view: V,
    field_errors: FieldErrors,
    plan_error: Option<&'static str>,
}

impl<V: View> WizardController<V> {
    /// Start a session at the first step with default selections
    pub fn new(view: V, pricing: PricingTable) -> Self {
        Self::with_state(view, pricing, FormState::default())
    }

    /// Start a session from an existing state (e.g. a non-default billing cycle)
    pub fn with_state(view: V, pricing: PricingTable, state: FormState) -> Self {
        let mut controller = Self {
            state,
            pricing,
            view,
            field_errors: FieldErrors::default(),
            plan_error: None,
        };
        controller.sync_view();
        controller
    }

    /// Try to move past the current step
    ///
    /// Returns the step the wizard is on afterwards. A refused transition
    /// leaves the step unchanged and reports why.
    pub fn advance(&mut self) -> Result<Step, StepError> {
        let current = self.state.current_step;
        match current {
            Step::Info => self.accept_contact()?,
            Step::Plan => self.require_plan()?,
            Step::AddOns => {}
            Step::Summary => {
                self.state.current_step = Step::Completed;
                self.view.show_completion();
                info!(
                    plan = ?self.state.selected_plan,
                    cycle = %self.state.billing_cycle,
                    addons = self.state.selected_addons.len(),
                    "signup confirmed"
                );
                return Ok(Step::Completed);
            }
            Step::Completed => {
                debug!("advance ignored after completion");
                return Ok(Step::Completed);
            }
        }

        let next = current.next().ok_or_else(|| {
            SignupError::InvalidState(format!("no step follows {}", current))
        })?;

        // Computed before moving so a failure leaves the step untouched
        let summary = if next == Step::Summary {
            Some(self.compute_summary()?)
        } else {
            None
        };

        self.state.current_step = next;
        self.view.show_step(next);
        if let Some(summary) = summary {
            self.view.render_summary(&summary);
        }
        debug!(from = current.number(), to = next.number(), "advanced");
        Ok(next)
    }

    /// Go back one step; no-op on the first step and after completion
    pub fn retreat(&mut self) -> Step {
        let current = self.state.current_step;
        if current.is_completed() {
            warn!("retreat ignored after completion");
            return current;
        }
        if let Some(prev) = current.prev() {
            self.state.current_step = prev;
            self.view.show_step(prev);
            debug!(from = current.number(), to = prev.number(), "retreated");
        }
        self.state.current_step
    }

    /// Choose a plan, clearing any plan-required error
    pub fn select_plan(&mut self, plan: Plan) {
        self.state.selected_plan = Some(plan);
        if self.plan_error.take().is_some() {
            self.view.show_plan_error(None);
        }
        self.view.reflect_selection(&self.state);
        debug!(%plan, "plan selected");
    }

    /// Switch billing cycle and re-price every plan and add-on
    pub fn set_billing_cycle(&mut self, cycle: BillingCycle) {
        self.state.billing_cycle = cycle;
        let sheet = self.price_sheet();
        self.view.render_prices(&sheet);
        self.view.reflect_selection(&self.state);

        if self.state.current_step == Step::Summary {
            match self.compute_summary() {
                Ok(summary) => self.view.render_summary(&summary),
                Err(err) => warn!(error = %err, "summary not refreshed after cycle change"),
            }
        }
        debug!(%cycle, "billing cycle set");
    }

    /// Flip between monthly and yearly billing
    pub fn toggle_billing_cycle(&mut self) -> BillingCycle {
        let cycle = self.state.billing_cycle.toggled();
        self.set_billing_cycle(cycle);
        cycle
    }

    /// Include or exclude an add-on; returns whether it is now selected
    pub fn toggle_addon(&mut self, addon: Addon, included: bool) -> bool {
        let changed = if included {
            self.state.selected_addons.insert(addon)
        } else {
            self.state.selected_addons.remove(&addon)
        };
        if changed {
            self.view.reflect_selection(&self.state);
            debug!(%addon, included, "add-on toggled");
        }
        self.state.has_addon(addon)
    }

    /// Jump straight back to the plan step, keeping every other choice
    pub fn change_plan(&mut self) {
        let from = self.state.current_step;
        self.state.current_step = Step::Plan;
        self.view.show_step(Step::Plan);
        self.view.reflect_selection(&self.state);
        debug!(from = from.number(), "change plan");
    }

    /// Re-check a contact field after an edit
    ///
    /// Clears the field's error as soon as it holds a non-blank value. Format
    /// problems are reported again by the next [`advance`](Self::advance).
    pub fn field_edited(&mut self, field: ContactField) {
        let input = self.view.contact_input();
        if !input.get(field).trim().is_empty() && self.field_errors.remove(field) {
            self.view.show_field_errors(&self.field_errors);
        }
    }

    /// Breakdown of the current selections
    pub fn compute_summary(&self) -> SignupResult<Summary> {
        compute_summary(&self.state, &self.pricing)
    }

    /// All prices for the current billing cycle
    pub fn price_sheet(&self) -> PriceSheet {
        PriceSheet::for_cycle(&self.pricing, self.state.billing_cycle)
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn plan_error(&self) -> Option<&'static str> {
        self.plan_error
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn accept_contact(&mut self) -> Result<(), StepError> {
        let input = self.view.contact_input();
        match validate_contact(&input) {
            Ok(contact) => {
                self.field_errors = FieldErrors::default();
                self.view.show_field_errors(&self.field_errors);
                self.state.contact = contact;
                Ok(())
            }
            Err(errors) => {
                warn!(errors = %errors, "contact details rejected");
                self.field_errors = errors.clone();
                self.view.show_field_errors(&errors);
                Err(StepError::Contact(errors))
            }
        }
    }

    fn require_plan(&mut self) -> Result<(), StepError> {
        if self.state.selected_plan.is_some() {
            self.plan_error = None;
            self.view.show_plan_error(None);
            return Ok(());
        }
        warn!("plan step left without a plan");
        self.plan_error = Some(PLAN_REQUIRED);
        self.view.show_plan_error(Some(PLAN_REQUIRED));
        Err(StepError::PlanRequired)
    }

    fn sync_view(&mut self) {
        let sheet = self.price_sheet();
        self.view.render_prices(&sheet);
        self.view.reflect_selection(&self.state);
        match self.state.current_step {
            Step::Completed => self.view.show_completion(),
            step => self.view.show_step(step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, Money};
    use crate::wizard::validation::{INVALID_EMAIL, REQUIRED};

    /// In-memory view recording what the controller pushed into it
    #[derive(Default)]
    struct RecordingView {
        contact: Contact,
        field_errors: FieldErrors,
        plan_error: Option<String>,
        sheet: Option<PriceSheet>,
        visible_step: Option<Step>,
        completed: bool,
        summary: Option<Summary>,
    }

    impl View for RecordingView {
        fn contact_input(&self) -> Contact {
            self.contact.clone()
        }

        fn show_field_errors(&mut self, errors: &FieldErrors) {
            self.field_errors = errors.clone();
        }

        fn show_plan_error(&mut self, message: Option<&str>) {
            self.plan_error = message.map(str::to_string);
        }

        fn render_prices(&mut self, sheet: &PriceSheet) {
            self.sheet = Some(sheet.clone());
        }

        fn show_step(&mut self, step: Step) {
            self.visible_step = Some(step);
            self.completed = false;
        }

        fn show_completion(&mut self) {
            self.completed = true;
        }

        fn render_summary(&mut self, summary: &Summary) {
            self.summary = Some(summary.clone());
        }
    }

    fn controller() -> WizardController<RecordingView> {
        WizardController::new(RecordingView::default(), PricingTable::builtin())
    }

    fn controller_at(step: Step) -> WizardController<RecordingView> {
        let state = FormState {
            current_step: step,
            selected_plan: Some(Plan::Arcade),
            ..FormState::default()
        };
        WizardController::with_state(RecordingView::default(), PricingTable::builtin(), state)
    }

    fn fill_contact(c: &mut WizardController<RecordingView>, name: &str, email: &str, phone: &str) {
        c.view_mut().contact = Contact::new(name, email, phone);
    }

    #[test]
    fn test_initial_render() {
        let c = controller();
        assert_eq!(c.current_step(), Step::Info);
        assert_eq!(c.view().visible_step, Some(Step::Info));
        assert_eq!(c.view().sheet.as_ref().unwrap().cycle, BillingCycle::Monthly);
    }

    #[test]
    fn test_advance_from_info_stores_trimmed_contact() {
        let mut c = controller();
        fill_contact(&mut c, " Stephen King ", "stephenking@lorem.com", " +1 234 567 890 ");

        assert_eq!(c.advance().unwrap(), Step::Plan);
        assert_eq!(c.state().contact, Contact::new("Stephen King", "stephenking@lorem.com", "+1 234 567 890"));
        assert_eq!(c.view().visible_step, Some(Step::Plan));
        assert!(c.field_errors().is_empty());
    }

    #[test]
    fn test_advance_rejects_padded_email() {
        let mut c = controller();
        fill_contact(&mut c, "Stephen King", " stephenking@lorem.com ", "+1 234 567 890");

        let err = c.advance().unwrap_err();
        assert_eq!(err.field_errors().unwrap().get(ContactField::Email), Some(INVALID_EMAIL));
        assert_eq!(c.current_step(), Step::Info);
        assert!(c.state().contact.is_empty());
    }

    #[test]
    fn test_advance_from_info_reports_every_error() {
        let mut c = controller();
        fill_contact(&mut c, "", "stephen@lorem", "");

        let err = c.advance().unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.get(ContactField::Name), Some(REQUIRED));
        assert_eq!(errors.get(ContactField::Email), Some(INVALID_EMAIL));
        assert_eq!(errors.get(ContactField::Phone), Some(REQUIRED));
        assert_eq!(c.current_step(), Step::Info);
        assert!(c.state().contact.is_empty());
        assert_eq!(c.view().field_errors.len(), 3);
    }

    #[test]
    fn test_emails_without_at_or_dot_block_advance() {
        for email in ["stephenlorem.com", "stephen@lorem", "stephen@", "@"] {
            let mut c = controller();
            fill_contact(&mut c, "Stephen", email, "555");
            let err = c.advance().unwrap_err();
            assert_eq!(err.field_errors().unwrap().get(ContactField::Email), Some(INVALID_EMAIL));
            assert_eq!(c.current_step(), Step::Info);
        }
    }

    #[test]
    fn test_fixed_fields_are_cleared_on_revalidation() {
        let mut c = controller();
        fill_contact(&mut c, "", "", "");
        assert!(c.advance().is_err());
        assert_eq!(c.field_errors().len(), 3);

        fill_contact(&mut c, "Stephen", "bad", "555");
        assert!(c.advance().is_err());
        assert_eq!(c.field_errors().len(), 1);
        assert_eq!(c.view().field_errors.get(ContactField::Name), None);
        assert_eq!(c.view().field_errors.get(ContactField::Email), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_field_edited_clears_error_once_non_blank() {
        let mut c = controller();
        assert!(c.advance().is_err());

        c.view_mut().contact.name = "   ".into();
        c.field_edited(ContactField::Name);
        assert_eq!(c.field_errors().get(ContactField::Name), Some(REQUIRED));

        c.view_mut().contact.name = "S".into();
        c.field_edited(ContactField::Name);
        assert_eq!(c.field_errors().get(ContactField::Name), None);
        assert_eq!(c.view().field_errors.get(ContactField::Name), None);
        assert_eq!(c.view().field_errors.get(ContactField::Phone), Some(REQUIRED));
    }

    #[test]
    fn test_plan_required_until_selected() {
        let mut c = WizardController::with_state(
            RecordingView::default(),
            PricingTable::builtin(),
            FormState {
                current_step: Step::Plan,
                ..FormState::default()
            },
        );

        assert!(matches!(c.advance(), Err(StepError::PlanRequired)));
        assert_eq!(c.current_step(), Step::Plan);
        assert_eq!(c.plan_error(), Some(PLAN_REQUIRED));
        assert_eq!(c.view().plan_error.as_deref(), Some("Please select a plan"));

        c.select_plan(Plan::Pro);
        assert_eq!(c.plan_error(), None);
        assert_eq!(c.view().plan_error, None);
        assert_eq!(c.advance().unwrap(), Step::AddOns);
    }

    #[test]
    fn test_addons_step_always_advances_and_renders_summary() {
        let mut c = controller_at(Step::AddOns);
        c.toggle_addon(Addon::LargerStorage, true);

        assert_eq!(c.advance().unwrap(), Step::Summary);
        let summary = c.view().summary.as_ref().unwrap();
        assert_eq!(summary.plan_name, "Arcade (Monthly)");
        assert_eq!(summary.total, Money::from_units(11));
    }

    #[test]
    fn test_confirm_moves_to_completed() {
        let mut c = controller_at(Step::Summary);
        assert_eq!(c.advance().unwrap(), Step::Completed);
        assert_eq!(c.current_step().number(), 5);
        assert!(c.view().completed);

        assert_eq!(c.advance().unwrap(), Step::Completed);
    }

    #[test]
    fn test_retreat() {
        let mut c = controller();
        assert_eq!(c.retreat(), Step::Info);

        let mut c = controller_at(Step::AddOns);
        assert_eq!(c.retreat(), Step::Plan);
        assert_eq!(c.view().visible_step, Some(Step::Plan));

        let mut c = controller_at(Step::Completed);
        assert_eq!(c.retreat(), Step::Completed);
    }

    #[test]
    fn test_toggle_addon_is_idempotent() {
        let mut c = controller();
        assert!(c.toggle_addon(Addon::OnlineService, true));
        assert!(c.toggle_addon(Addon::OnlineService, true));
        assert_eq!(c.state().selected_addons.len(), 1);

        assert!(!c.toggle_addon(Addon::OnlineService, false));
        assert!(!c.toggle_addon(Addon::OnlineService, false));
        assert!(c.state().selected_addons.is_empty());
    }

    #[test]
    fn test_change_plan_from_summary_and_completed() {
        for step in [Step::Summary, Step::Completed] {
            let mut c = controller_at(step);
            c.toggle_addon(Addon::CustomProfile, true);
            c.set_billing_cycle(BillingCycle::Yearly);

            c.change_plan();
            assert_eq!(c.current_step(), Step::Plan);
            assert_eq!(c.view().visible_step, Some(Step::Plan));
            assert!(!c.view().completed);
            assert!(c.state().has_addon(Addon::CustomProfile));
            assert_eq!(c.state().billing_cycle, BillingCycle::Yearly);
            assert_eq!(c.state().selected_plan, Some(Plan::Arcade));
        }
    }

    #[test]
    fn test_billing_cycle_reprices_without_touching_selection() {
        let mut c = controller_at(Step::Plan);
        c.select_plan(Plan::Advanced);
        c.toggle_addon(Addon::OnlineService, true);

        c.set_billing_cycle(BillingCycle::Yearly);
        let sheet = c.view().sheet.as_ref().unwrap();
        assert_eq!(sheet.cycle, BillingCycle::Yearly);
        assert_eq!(sheet.plan(Plan::Advanced).unwrap().price, Money::from_units(120));
        assert_eq!(sheet.addon(Addon::OnlineService).unwrap().price, Money::from_units(10));
        assert_eq!(c.state().selected_plan, Some(Plan::Advanced));
        assert!(c.state().has_addon(Addon::OnlineService));

        assert_eq!(c.toggle_billing_cycle(), BillingCycle::Monthly);
        let sheet = c.view().sheet.as_ref().unwrap();
        assert_eq!(sheet.plan(Plan::Arcade).unwrap().price, Money::from_units(9));
    }

    #[test]
    fn test_full_walkthrough() {
        let mut c = controller();
        fill_contact(&mut c, "Ada", "ada@example.com", "555-0100");
        assert_eq!(c.advance().unwrap(), Step::Plan);

        c.select_plan(Plan::Advanced);
        c.set_billing_cycle(BillingCycle::Yearly);
        assert_eq!(c.advance().unwrap(), Step::AddOns);

        c.toggle_addon(Addon::OnlineService, true);
        c.toggle_addon(Addon::CustomProfile, true);
        assert_eq!(c.advance().unwrap(), Step::Summary);

        let summary = c.compute_summary().unwrap();
        assert_eq!(summary.plan_price, Money::from_units(120));
        assert_eq!(summary.total, Money::from_units(150));
        assert_eq!(c.view().summary.as_ref(), Some(&summary));

        assert_eq!(c.advance().unwrap(), Step::Completed);
    }

    #[test]
    fn test_cycle_change_on_summary_without_plan_keeps_view() {
        let state = FormState {
            current_step: Step::Summary,
            ..FormState::default()
        };
        let mut c = WizardController::with_state(RecordingView::default(), PricingTable::builtin(), state);

        c.set_billing_cycle(BillingCycle::Yearly);
        assert_eq!(c.state().billing_cycle, BillingCycle::Yearly);
        assert!(c.view().summary.is_none());
    }

    #[test]
    fn test_compute_summary_without_plan_fails() {
        let c = controller();
        assert!(c.compute_summary().unwrap_err().is_invalid_state());
    }
}
