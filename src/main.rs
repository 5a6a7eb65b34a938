use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use signup::cli::{
    handle_config_command, handle_init_command, handle_pricing_command, handle_quote_command,
    QuoteArgs,
};
use signup::config::{paths::SignupPaths, settings::Settings};
use signup::console::ConsoleWizard;
use signup::display::format_summary;
use signup::logging::{init_logging, LogTarget};
use signup::models::{FormState, Step};

#[derive(Parser)]
#[command(
    name = "signup",
    author = "Kaylee Beyene",
    version,
    about = "Terminal multi-step subscription signup wizard",
    long_about = "Walks through personal info, plan selection, add-ons and a \
                  summary before confirming a subscription. Runs as a full-screen \
                  terminal UI or as line prompts, and can quote prices directly."
)]
struct Cli {
    /// Pricing file (.yaml, .yml or .json) to use instead of the configured one
    #[arg(long, global = true, env = "SIGNUP_PRICING_FILE")]
    pricing: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Run the wizard as line prompts on stdin/stdout
    Wizard,

    /// Show all plan and add-on prices
    Pricing {
        /// Only show one billing cycle (monthly, yearly)
        #[arg(short, long)]
        cycle: Option<String>,
    },

    /// Price a plan and add-ons without running the wizard
    Quote(QuoteArgs),

    /// Show current configuration and paths
    Config,

    /// Write default settings and a pricing template
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SignupPaths::new();
    let settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui);
    let log_file = paths.log_file();
    let target = match command {
        Commands::Tui => LogTarget::File(&log_file),
        _ => LogTarget::Stderr,
    };
    init_logging(&settings.log_level, target)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Tui => {
            let pricing = settings.load_pricing(&paths, cli.pricing.as_deref())?;
            let app = signup::tui::run_tui(pricing, &settings)?;
            if app.wizard.current_step() == Step::Completed {
                let summary = app.wizard.compute_summary()?;
                writeln!(out, "Subscription confirmed:")?;
                write!(out, "{}", format_summary(&summary, &settings.currency_symbol))?;
            }
        }
        Commands::Wizard => {
            let pricing = settings.load_pricing(&paths, cli.pricing.as_deref())?;
            let stdin = io::stdin();
            let mut wizard = ConsoleWizard::new(
                pricing,
                FormState::new(settings.default_billing_cycle),
                &settings.currency_symbol,
                stdin.lock(),
                &mut out,
            );
            wizard.run()?;
        }
        Commands::Pricing { cycle } => {
            let pricing = settings.load_pricing(&paths, cli.pricing.as_deref())?;
            handle_pricing_command(&pricing, &settings, cycle.as_deref(), &mut out)?;
        }
        Commands::Quote(args) => {
            let pricing = settings.load_pricing(&paths, cli.pricing.as_deref())?;
            handle_quote_command(&pricing, &settings, &args, &mut out)?;
        }
        Commands::Config => {
            handle_config_command(&paths, &settings, &mut out)?;
        }
        Commands::Init { force } => {
            handle_init_command(&paths, force, &mut out)?;
        }
    }

    Ok(())
}
