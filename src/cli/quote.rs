//! Quote CLI command
//!
//! Computes a summary straight from arguments, without walking the wizard.

use std::io::Write;

use clap::{Args, ValueEnum};
use tracing::debug;

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::{SignupError, SignupResult};
use crate::export::{export_quote_json, export_quote_yaml};
use crate::models::{Addon, FormState, Plan, PricingTable, Step};
use crate::wizard::compute_summary;

use super::parse_cycle;

/// Output format for a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Arguments of `signup quote`
#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    /// Plan (arcade, advanced, pro)
    #[arg(short, long)]
    pub plan: String,
    /// Billing cycle (monthly, yearly); defaults to the configured cycle
    #[arg(short, long)]
    pub cycle: Option<String>,
    /// Add-on to include (online-service, larger-storage, custom-profile); repeatable
    #[arg(short, long = "addon")]
    pub addons: Vec<String>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl QuoteArgs {
    /// Turn the arguments into the state the summary step would see
    pub fn to_state(&self, settings: &Settings) -> SignupResult<FormState> {
        let plan = Plan::parse(&self.plan).ok_or_else(|| SignupError::unknown_plan(&self.plan))?;
        let cycle = match &self.cycle {
            Some(value) => parse_cycle(value)?,
            None => settings.default_billing_cycle,
        };

        let mut state = FormState::new(cycle);
        state.current_step = Step::Summary;
        state.selected_plan = Some(plan);
        for name in &self.addons {
            let addon = Addon::parse(name).ok_or_else(|| SignupError::unknown_addon(name))?;
            state.selected_addons.insert(addon);
        }
        Ok(state)
    }
}

/// Handle `signup quote`
pub fn handle_quote_command<W: Write>(
    pricing: &PricingTable,
    settings: &Settings,
    args: &QuoteArgs,
    out: &mut W,
) -> SignupResult<()> {
    let state = args.to_state(settings)?;
    let summary = compute_summary(&state, pricing)?;
    debug!(plan = %summary.plan, cycle = %summary.cycle, total = summary.total.cents(), "quote computed");

    let symbol = settings.currency_symbol.as_str();
    match args.format {
        OutputFormat::Text => write!(out, "{}", format_summary(&summary, symbol))?,
        OutputFormat::Json => export_quote_json(&summary, symbol, out, true)?,
        OutputFormat::Yaml => export_quote_yaml(&summary, symbol, out)?,
    }
    Ok(())
}
