//! Plan selection step

use std::io::{BufRead, Write};

use crate::error::SignupResult;
use crate::models::Plan;
use crate::wizard::summary::{capitalize, price_tag};
use crate::wizard::WizardController;

use crate::console::view::ConsoleView;
use crate::console::wizard::Prompter;
use super::{pick, settle, Command, Flow};

pub fn run<R: BufRead, W: Write>(
    controller: &mut WizardController<ConsoleView>,
    io: &mut Prompter<R, W>,
) -> SignupResult<Flow> {
    print_menu(controller, io)?;

    let Some(answer) = io.prompt("Select a plan (1-3 or name), 'b' to switch billing [continue]: ")?
    else {
        return Ok(Flow::Cancelled);
    };

    match Command::parse(&answer) {
        Command::Continue => return settle(controller.advance()),
        Command::Back => {
            controller.retreat();
        }
        Command::ToggleBilling => {
            controller.toggle_billing_cycle();
        }
        Command::Choice(choice) => match pick(&choice, &Plan::ALL, Plan::parse) {
            Some(plan) => controller.select_plan(plan),
            None => io.say(&format!("  ! Unknown plan: '{}'. Choose 1-3 or a plan name.", choice))?,
        },
    }
    Ok(Flow::Continue)
}

fn print_menu<R: BufRead, W: Write>(
    controller: &WizardController<ConsoleView>,
    io: &mut Prompter<R, W>,
) -> SignupResult<()> {
    let view = controller.view();
    let state = view.selection();
    let sheet = controller.price_sheet();

    io.say("")?;
    io.say(&format!("Billing: {}", state.billing_cycle.label()))?;
    for (i, quote) in sheet.plans.iter().enumerate() {
        let mark = if state.selected_plan == Some(quote.plan) { "x" } else { " " };
        let benefit = quote.benefit.unwrap_or("");
        io.say(
            format!(
                "  {}. [{}] {:<9} {:>8}  {}",
                i + 1,
                mark,
                capitalize(quote.plan.as_str()),
                price_tag(quote.price, sheet.cycle, view.symbol()),
                benefit
            )
            .trim_end(),
        )?;
    }
    Ok(())
}
