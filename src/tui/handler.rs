//! Event handler for the TUI
//!
//! Routes keyboard events to the wizard controller based on the step being
//! shown. On the info step printable keys go into the focused input, so the
//! single-letter shortcuts only apply on the later steps.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::{Addon, Plan, Step};
use crate::wizard::StepError;

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('n') if ctrl => return advance(app),
        KeyCode::Char('b') if ctrl => {
            retreat(app);
            return Ok(());
        }
        KeyCode::F(1) => {
            app.toggle_help();
            return Ok(());
        }
        _ => {}
    }

    match app.wizard.current_step() {
        Step::Info => handle_info_key(app, key),
        Step::Plan => handle_plan_key(app, key),
        Step::AddOns => handle_addons_key(app, key),
        Step::Summary => handle_summary_key(app, key),
        Step::Completed => handle_completed_key(app, key),
    }
}

fn handle_info_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => return advance(app),
        KeyCode::Tab | KeyCode::Down => {
            let next = app.view().focused_field.next();
            app.view_mut().focus(next);
        }
        KeyCode::BackTab | KeyCode::Up => {
            let prev = app.view().focused_field.prev();
            app.view_mut().focus(prev);
        }
        KeyCode::Left => app.view_mut().focused_input_mut().move_left(),
        KeyCode::Right => app.view_mut().focused_input_mut().move_right(),
        KeyCode::Home => app.view_mut().focused_input_mut().move_start(),
        KeyCode::End => app.view_mut().focused_input_mut().move_end(),
        KeyCode::Backspace => edit(app, |input| input.backspace()),
        KeyCode::Delete => edit(app, |input| input.delete()),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            edit(app, |input| input.insert(c))
        }
        _ => {}
    }
    Ok(())
}

/// Apply an edit to the focused input and let the controller re-check it
fn edit(app: &mut App, apply: impl FnOnce(&mut super::widgets::TextInput)) {
    let field = app.view().focused_field;
    apply(app.view_mut().focused_input_mut());
    app.wizard.field_edited(field);
}

/// Keys shared by the plan, add-ons and summary steps; `true` if handled
fn handle_common_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Esc => retreat(app),
        KeyCode::Enter => advance(app)?,
        KeyCode::Char('b') | KeyCode::Char('B') => {
            let cycle = app.wizard.toggle_billing_cycle();
            app.set_status(format!("Billing: {}", cycle.label()));
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn handle_plan_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if handle_common_key(app, key)? {
        return Ok(());
    }

    let last = Plan::ALL.len() - 1;
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            let view = app.view_mut();
            view.plan_cursor = view.plan_cursor.saturating_sub(1);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let view = app.view_mut();
            view.plan_cursor = (view.plan_cursor + 1).min(last);
        }
        KeyCode::Char(' ') => {
            let plan = Plan::ALL[app.view().plan_cursor.min(last)];
            app.wizard.select_plan(plan);
            app.clear_status();
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = (c as usize) - ('1' as usize);
            app.view_mut().plan_cursor = index;
            app.wizard.select_plan(Plan::ALL[index]);
            app.clear_status();
        }
        _ => {}
    }
    Ok(())
}

fn handle_addons_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if handle_common_key(app, key)? {
        return Ok(());
    }

    let last = Addon::ALL.len() - 1;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            let view = app.view_mut();
            view.addon_cursor = view.addon_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let view = app.view_mut();
            view.addon_cursor = (view.addon_cursor + 1).min(last);
        }
        KeyCode::Char(' ') => {
            let addon = Addon::ALL[app.view().addon_cursor.min(last)];
            toggle_addon(app, addon);
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = (c as usize) - ('1' as usize);
            app.view_mut().addon_cursor = index;
            toggle_addon(app, Addon::ALL[index]);
        }
        _ => {}
    }
    Ok(())
}

fn toggle_addon(app: &mut App, addon: Addon) {
    let included = !app.wizard.state().has_addon(addon);
    app.wizard.toggle_addon(addon, included);
}

fn handle_summary_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if let KeyCode::Char('c') | KeyCode::Char('C') = key.code {
        app.wizard.change_plan();
        app.clear_status();
        return Ok(());
    }
    handle_common_key(app, key)?;
    Ok(())
}

fn handle_completed_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Enter | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.wizard.change_plan();
            app.clear_status();
        }
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
    Ok(())
}

fn advance(app: &mut App) -> Result<()> {
    match app.wizard.advance() {
        Ok(Step::Completed) => app.set_status("Subscription confirmed"),
        Ok(_) => app.clear_status(),
        Err(StepError::Contact(errors)) => {
            if let Some((field, _)) = errors.iter().next() {
                app.view_mut().focus(field);
            }
            let count = errors.len();
            app.set_status(format!(
                "{} field{} need{} attention",
                count,
                if count == 1 { "" } else { "s" },
                if count == 1 { "s" } else { "" }
            ));
        }
        Err(StepError::PlanRequired) => app.set_status("Select a plan to continue"),
        Err(StepError::State(err)) => return Err(err.into()),
    }
    Ok(())
}

fn retreat(app: &mut App) {
    app.wizard.retreat();
    app.clear_status();
}
