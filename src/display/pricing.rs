//! Price table display
//!
//! Renders the whole catalog with tabled.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Addon, BillingCycle, Plan, PricingTable};
use crate::wizard::summary::{capitalize, price_tag, title_case_identifier, YEARLY_BENEFIT};

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Yearly")]
    yearly: String,
    #[tabled(rename = "Details")]
    details: String,
}

#[derive(Tabled)]
struct CycleRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Details")]
    details: String,
}

fn plan_details(cycle: Option<BillingCycle>) -> String {
    match cycle {
        Some(BillingCycle::Monthly) => String::new(),
        Some(BillingCycle::Yearly) => YEARLY_BENEFIT.to_string(),
        None => format!("yearly: {}", YEARLY_BENEFIT),
    }
}

/// Format every plan and add-on price
///
/// With a cycle only that cycle's column is shown.
pub fn format_price_table(
    pricing: &PricingTable,
    cycle: Option<BillingCycle>,
    symbol: &str,
) -> String {
    let mut table = match cycle {
        Some(cycle) => {
            let plans = Plan::ALL.iter().map(|plan| CycleRow {
                kind: "Plan",
                name: capitalize(plan.as_str()),
                price: price_tag(pricing.plan_price(*plan, cycle), cycle, symbol),
                details: plan_details(Some(cycle)),
            });
            let addons = Addon::ALL.iter().map(|addon| CycleRow {
                kind: "Add-on",
                name: title_case_identifier(addon.as_str()),
                price: format!("+{}", price_tag(pricing.addon_price(*addon, cycle), cycle, symbol)),
                details: addon.description().to_string(),
            });
            Table::new(plans.chain(addons))
        }
        None => {
            let row = |kind, name, price: crate::models::Price, details| CatalogRow {
                kind,
                name,
                monthly: price_tag(price.monthly, BillingCycle::Monthly, symbol),
                yearly: price_tag(price.yearly, BillingCycle::Yearly, symbol),
                details,
            };
            let plans = Plan::ALL.iter().map(|plan| {
                row(
                    "Plan",
                    capitalize(plan.as_str()),
                    pricing.plan(*plan),
                    plan_details(None),
                )
            });
            let addons = Addon::ALL.iter().map(|addon| {
                row(
                    "Add-on",
                    title_case_identifier(addon.as_str()),
                    pricing.addon(*addon),
                    addon.description().to_string(),
                )
            });
            Table::new(plans.chain(addons).collect::<Vec<_>>())
        }
    };

    table.with(Style::sharp()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_catalog() {
        let text = format_price_table(&PricingTable::builtin(), None, "$");
        assert!(text.contains("Monthly"));
        assert!(text.contains("Yearly"));
        assert!(text.contains("Arcade"));
        assert!(text.contains("$9/mo"));
        assert!(text.contains("$150/yr"));
        assert!(text.contains("Larger Storage"));
        assert!(text.contains("Extra 1TB of cloud save"));
    }

    #[test]
    fn test_single_cycle() {
        let text = format_price_table(&PricingTable::builtin(), Some(BillingCycle::Yearly), "$");
        assert!(text.contains("$120/yr"));
        assert!(text.contains("+$10/yr"));
        assert!(text.contains("2 months free"));
        assert!(!text.contains("/mo"));
    }
}
