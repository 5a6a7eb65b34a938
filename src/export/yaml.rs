//! YAML quote export

use std::io::Write;

use crate::error::SignupResult;
use crate::export::json::QuoteExport;
use crate::wizard::summary::Summary;

/// Write a quote as YAML with a short header comment
pub fn export_quote_yaml<W: Write>(
    summary: &Summary,
    symbol: &str,
    writer: &mut W,
) -> SignupResult<()> {
    let export = QuoteExport::from_summary(summary, symbol);

    writeln!(writer, "# Subscription quote")?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingCycle, FormState, Plan, PricingTable};
    use crate::wizard::compute_summary;

    #[test]
    fn test_yaml_export() {
        let mut state = FormState::new(BillingCycle::Monthly);
        state.selected_plan = Some(Plan::Pro);
        let summary = compute_summary(&state, &PricingTable::builtin()).unwrap();

        let mut buffer = Vec::new();
        export_quote_yaml(&summary, "$", &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Subscription quote"));
        assert!(text.contains("plan: pro"));
        assert!(text.contains("billing_cycle: monthly"));
        assert!(text.contains("total_cents: 1500"));
        assert!(text.contains("addons: []"));
    }
}
