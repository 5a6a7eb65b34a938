//! Add-on selection step

use std::io::{BufRead, Write};

use crate::error::SignupResult;
use crate::models::Addon;
use crate::wizard::summary::{addon_price_tag, title_case_identifier};
use crate::wizard::WizardController;

use crate::console::view::ConsoleView;
use crate::console::wizard::Prompter;
use super::{pick, settle, Command, Flow};

pub fn run<R: BufRead, W: Write>(
    controller: &mut WizardController<ConsoleView>,
    io: &mut Prompter<R, W>,
) -> SignupResult<Flow> {
    print_menu(controller, io)?;

    let Some(answer) = io.prompt("Toggle an add-on (1-3 or name), 'b' to switch billing [continue]: ")?
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
        Command::Choice(choice) => match pick(&choice, &Addon::ALL, Addon::parse) {
            Some(addon) => {
                let included = !controller.state().has_addon(addon);
                controller.toggle_addon(addon, included);
            }
            None => io.say(&format!(
                "  ! Unknown add-on: '{}'. Choose 1-3 or an add-on name.",
                choice
            ))?,
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
    for (i, quote) in sheet.addons.iter().enumerate() {
        let mark = if state.has_addon(quote.addon) { "x" } else { " " };
        io.say(&format!(
            "  {}. [{}] {:<15} {:>9}  {}",
            i + 1,
            mark,
            title_case_identifier(quote.addon.as_str()),
            addon_price_tag(quote.price, sheet.cycle, view.symbol()),
            quote.addon.description()
        ))?;
    }
    Ok(())
}
