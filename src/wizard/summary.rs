//! Summary and price-sheet computation
//!
//! Pure functions over [`FormState`] and [`PricingTable`]. Nothing here
//! mutates state, so every helper can be called on its own in tests.

use serde::Serialize;

use crate::error::{SignupError, SignupResult};
use crate::models::{Addon, BillingCycle, FormState, Money, Plan, PricingTable};

/// Annotation shown on every plan card in the yearly cycle
pub const YEARLY_BENEFIT: &str = "2 months free";

/// One add-on line of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddonLine {
    pub addon: Addon,
    /// Title-cased name, e.g. `Online Service`
    pub name: String,
    pub price: Money,
}

/// Breakdown shown on the summary step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub plan: Plan,
    pub cycle: BillingCycle,
    /// e.g. `Advanced (Yearly)`
    pub plan_name: String,
    pub plan_price: Money,
    pub addons: Vec<AddonLine>,
    pub total: Money,
    /// e.g. `Total (per year)`
    pub total_label: String,
}

/// Compute the summary for the current selections
///
/// Fails with [`SignupError::InvalidState`] when no plan is selected; the
/// wizard only reaches the summary after the plan step has passed.
pub fn compute_summary(state: &FormState, pricing: &PricingTable) -> SignupResult<Summary> {
    let plan = state.selected_plan.ok_or_else(|| {
        SignupError::InvalidState("summary requested before a plan was selected".into())
    })?;
    let cycle = state.billing_cycle;

    let plan_price = pricing.plan_price(plan, cycle);
    let addons: Vec<AddonLine> = state
        .selected_addons
        .iter()
        .map(|addon| AddonLine {
            addon: *addon,
            name: title_case_identifier(addon.as_str()),
            price: pricing.addon_price(*addon, cycle),
        })
        .collect();
    let total = plan_price + addons.iter().map(|line| line.price).sum::<Money>();

    Ok(Summary {
        plan,
        cycle,
        plan_name: plan_display_name(plan, cycle),
        plan_price,
        addons,
        total,
        total_label: total_label(cycle),
    })
}

/// Price of one plan in the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanQuote {
    pub plan: Plan,
    pub price: Money,
    pub benefit: Option<&'static str>,
}

/// Price of one add-on in the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddonQuote {
    pub addon: Addon,
    pub price: Money,
}

/// Every plan and add-on priced for one billing cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceSheet {
    pub cycle: BillingCycle,
    pub plans: Vec<PlanQuote>,
    pub addons: Vec<AddonQuote>,
}

impl PriceSheet {
    pub fn for_cycle(pricing: &PricingTable, cycle: BillingCycle) -> Self {
        let benefit = match cycle {
            BillingCycle::Monthly => None,
            BillingCycle::Yearly => Some(YEARLY_BENEFIT),
        };

        Self {
            cycle,
            plans: Plan::ALL
                .iter()
                .map(|plan| PlanQuote {
                    plan: *plan,
                    price: pricing.plan_price(*plan, cycle),
                    benefit,
                })
                .collect(),
            addons: Addon::ALL
                .iter()
                .map(|addon| AddonQuote {
                    addon: *addon,
                    price: pricing.addon_price(*addon, cycle),
                })
                .collect(),
        }
    }

    pub fn plan(&self, plan: Plan) -> Option<&PlanQuote> {
        self.plans.iter().find(|q| q.plan == plan)
    }

    pub fn addon(&self, addon: Addon) -> Option<&AddonQuote> {
        self.addons.iter().find(|q| q.addon == addon)
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `online-service` → `Online Service`
pub fn title_case_identifier(identifier: &str) -> String {
    identifier
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Arcade (Monthly)`
pub fn plan_display_name(plan: Plan, cycle: BillingCycle) -> String {
    format!("{} ({})", capitalize(plan.as_str()), cycle.label())
}

/// `Total (per month)`
pub fn total_label(cycle: BillingCycle) -> String {
    format!("Total (per {})", cycle.period())
}

/// `$9/mo`
pub fn price_tag(price: Money, cycle: BillingCycle, symbol: &str) -> String {
    format!("{}/{}", price.format_with_symbol(symbol), cycle.short())
}

/// `+$1/mo`
pub fn addon_price_tag(price: Money, cycle: BillingCycle, symbol: &str) -> String {
    format!("+{}", price_tag(price, cycle, symbol))
}
