//! Pricing CLI command

use std::io::Write;

use crate::config::Settings;
use crate::display::format_price_table;
use crate::error::SignupResult;
use crate::models::PricingTable;

use super::parse_cycle;

/// Print every plan and add-on price, optionally for one cycle only
pub fn handle_pricing_command<W: Write>(
    pricing: &PricingTable,
    settings: &Settings,
    cycle: Option<&str>,
    out: &mut W,
) -> SignupResult<()> {
    let cycle = cycle.map(parse_cycle).transpose()?;
    writeln!(
        out,
        "{}",
        format_price_table(pricing, cycle, &settings.currency_symbol)
    )?;
    Ok(())
}
