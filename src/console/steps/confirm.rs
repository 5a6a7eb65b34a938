//! Finishing-up step
//!
//! The summary itself is printed by the view when the step is entered.

use std::io::{BufRead, Write};

use crate::error::SignupResult;
use crate::wizard::WizardController;

use crate::console::view::ConsoleView;
use crate::console::wizard::Prompter;
use super::{settle, Command, Flow};

pub fn run<R: BufRead, W: Write>(
    controller: &mut WizardController<ConsoleView>,
    io: &mut Prompter<R, W>,
) -> SignupResult<Flow> {
    io.say("")?;
    let Some(answer) =
        io.prompt("Confirm? (yes), 'change' to pick another plan, 'b' to switch billing [yes]: ")?
    else {
        return Ok(Flow::Cancelled);
    };

    match answer.to_lowercase().as_str() {
        "change" => controller.change_plan(),
        "y" | "yes" | "confirm" => return settle(controller.advance()),
        _ => match Command::parse(&answer) {
            Command::Continue => return settle(controller.advance()),
            Command::Back => {
                controller.retreat();
            }
            Command::ToggleBilling => {
                controller.toggle_billing_cycle();
            }
            Command::Choice(choice) => {
                io.say(&format!("  ! Unknown command: '{}'", choice))?;
            }
        },
    }
    Ok(Flow::Continue)
}
