//! JSON quote export
//!
//! Serializes a computed summary with both raw cents and display strings so
//! scripts never have to parse formatted prices.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::SignupResult;
use crate::models::{Addon, BillingCycle, Plan};
use crate::wizard::summary::{addon_price_tag, price_tag, Summary};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Quote export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    pub plan: Plan,
    pub billing_cycle: BillingCycle,

    /// e.g. `Advanced (Yearly)`
    pub plan_name: String,
    pub plan_price_cents: i64,
    pub plan_price: String,

    pub addons: Vec<AddonExport>,

    pub total_label: String,
    pub total_cents: i64,
    pub total: String,
}

/// One add-on line of a quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonExport {
    pub addon: Addon,
    pub name: String,
    pub price_cents: i64,
    pub price: String,
}

impl QuoteExport {
    /// Build an export from a summary, formatting prices with `symbol`
    pub fn from_summary(summary: &Summary, symbol: &str) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            plan: summary.plan,
            billing_cycle: summary.cycle,
            plan_name: summary.plan_name.clone(),
            plan_price_cents: summary.plan_price.cents(),
            plan_price: price_tag(summary.plan_price, summary.cycle, symbol),
            addons: summary
                .addons
                .iter()
                .map(|line| AddonExport {
                    addon: line.addon,
                    name: line.name.clone(),
                    price_cents: line.price.cents(),
                    price: addon_price_tag(line.price, summary.cycle, symbol),
                })
                .collect(),
            total_label: summary.total_label.clone(),
            total_cents: summary.total.cents(),
            total: price_tag(summary.total, summary.cycle, symbol),
        }
    }
}

/// Write a quote as JSON
pub fn export_quote_json<W: Write>(
    summary: &Summary,
    symbol: &str,
    writer: &mut W,
    pretty: bool,
) -> SignupResult<()> {
    let export = QuoteExport::from_summary(summary, symbol);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormState, PricingTable};
    use crate::wizard::compute_summary;

    fn summary() -> Summary {
        let mut state = FormState::new(BillingCycle::Yearly);
        state.selected_plan = Some(Plan::Advanced);
        state.selected_addons.insert(Addon::OnlineService);
        state.selected_addons.insert(Addon::CustomProfile);
        compute_summary(&state, &PricingTable::builtin()).unwrap()
    }

    #[test]
    fn test_quote_export() {
        let mut buffer = Vec::new();
        export_quote_json(&summary(), "$", &mut buffer, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["plan"], "advanced");
        assert_eq!(value["billing_cycle"], "yearly");
        assert_eq!(value["plan_price_cents"], 12000);
        assert_eq!(value["addons"][0]["addon"], "online-service");
        assert_eq!(value["addons"][1]["price"], "+$20/yr");
        assert_eq!(value["total_cents"], 15000);
        assert_eq!(value["total"], "$150/yr");
        assert_eq!(value["total_label"], "Total (per year)");
    }

    #[test]
    fn test_compact_is_single_line() {
        let mut buffer = Vec::new();
        export_quote_json(&summary(), "$", &mut buffer, false).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
