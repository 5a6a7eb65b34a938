//! Summary display formatting
//!
//! Formats a computed [`Summary`] the way the finishing-up step shows it.

use crate::wizard::summary::{addon_price_tag, price_tag, Summary};

/// Format a summary as aligned text lines
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let plan_tag = price_tag(summary.plan_price, summary.cycle, symbol);
    let total_tag = price_tag(summary.total, summary.cycle, symbol);
    let addon_rows: Vec<(String, String)> = summary
        .addons
        .iter()
        .map(|line| {
            (
                line.name.clone(),
                addon_price_tag(line.price, summary.cycle, symbol),
            )
        })
        .collect();

    let label_width = addon_rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain([
            summary.plan_name.chars().count(),
            summary.total_label.chars().count(),
        ])
        .max()
        .unwrap_or(0);
    let price_width = addon_rows
        .iter()
        .map(|(_, tag)| tag.chars().count())
        .chain([plan_tag.chars().count(), total_tag.chars().count()])
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<label_width$}  {:>price_width$}\n",
        summary.plan_name,
        plan_tag,
        label_width = label_width,
        price_width = price_width,
    ));
    output.push_str(&format!(
        "{:-<width$}\n",
        "",
        width = label_width + price_width + 2
    ));

    if addon_rows.is_empty() {
        output.push_str("No add-ons selected\n");
    }
    for (name, tag) in &addon_rows {
        output.push_str(&format!(
            "{:<label_width$}  {:>price_width$}\n",
            name,
            tag,
            label_width = label_width,
            price_width = price_width,
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "{:<label_width$}  {:>price_width$}\n",
        summary.total_label,
        total_tag,
        label_width = label_width,
        price_width = price_width,
    ));

    output
}
