//! Personal info step
//!
//! Asks for every field on the first pass, then only for the fields that
//! failed validation.

use std::io::{BufRead, Write};

use crate::error::SignupResult;
use crate::models::ContactField;
use crate::wizard::{StepError, WizardController};

use crate::console::view::ConsoleView;
use crate::console::wizard::Prompter;
use super::{settle, Flow};

pub fn run<R: BufRead, W: Write>(
    controller: &mut WizardController<ConsoleView>,
    io: &mut Prompter<R, W>,
) -> SignupResult<Flow> {
    let fields: Vec<ContactField> = if controller.field_errors().is_empty() {
        ContactField::ALL.to_vec()
    } else {
        controller.field_errors().iter().map(|(field, _)| field).collect()
    };

    for field in fields {
        let current = controller.view().contact().get(field).to_string();
        let prompt = if current.trim().is_empty() {
            format!("{} ({}): ", field.label(), field.placeholder())
        } else {
            format!("{} [{}]: ", field.label(), current)
        };

        let Some(answer) = io.prompt(&prompt)? else {
            return Ok(Flow::Cancelled);
        };
        if !answer.is_empty() {
            controller.view_mut().set_field(field, answer);
            controller.field_edited(field);
        }
    }

    match controller.advance() {
        Err(StepError::Contact(errors)) => {
            for (field, message) in errors.iter() {
                io.say(&format!("  ! {}: {}", field.label(), message))?;
            }
            Ok(Flow::Continue)
        }
        other => settle(other),
    }
}
