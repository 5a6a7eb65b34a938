//! TUI Views module
//!
//! One panel per wizard step, plus the step sidebar, status bar and help
//! overlay.

pub mod addons;
pub mod completed;
pub mod help;
pub mod info;
pub mod plan;
pub mod sidebar;
pub mod status_bar;
pub mod summary;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Step;

use super::app::App;
use super::layout::{AppLayout, StepPanelLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    let step = app.view().visible_step;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(layout.main);
    frame.render_widget(block, layout.main);

    if step == Step::Completed {
        completed::render(frame, app, inner);
    } else {
        let panel = StepPanelLayout::new(inner);
        render_header(frame, panel.header, step);
        match step {
            Step::Info => info::render(frame, app, panel.content),
            Step::Plan => plan::render(frame, app, panel.content),
            Step::AddOns => addons::render(frame, app, panel.content),
            Step::Summary => summary::render(frame, app, panel.content),
            Step::Completed => {}
        }
        render_footer(frame, panel.footer, step);
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.show_help {
        help::render(frame, app);
    }
}

/// Line under the step title
pub fn subtitle(step: Step) -> &'static str {
    match step {
        Step::Info => "Please provide your name, email address, and phone number.",
        Step::Plan => "You have the option of monthly or yearly billing.",
        Step::AddOns => "Add-ons help enhance your gaming experience.",
        Step::Summary => "Double-check everything looks OK before confirming.",
        Step::Completed => "",
    }
}

fn render_header(frame: &mut Frame, area: Rect, step: Step) {
    let lines = vec![
        Line::from(Span::styled(
            step.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle(step), Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, area: Rect, step: Step) {
    let next = if step == Step::Summary { "Confirm" } else { "Next Step" };
    let mut spans = Vec::new();
    if step != Step::Info {
        spans.push(Span::styled("Esc", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Go Back   "));
    }
    spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(format!(" {}", next)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Style for a card or row depending on cursor and selection
pub(crate) fn item_style(highlighted: bool, selected: bool) -> Style {
    let style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    if highlighted {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::PricingTable;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_info_screen() {
        let app = App::new(PricingTable::builtin(), &Settings::default());
        let text = screen_text(&app);
        assert!(text.contains("Personal info"));
        assert!(text.contains("YOUR INFO"));
        assert!(text.contains("Email Address"));
        assert!(text.contains("Next Step"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::new(PricingTable::builtin(), &Settings::default());
        app.show_help = true;
        let text = screen_text(&app);
        assert!(text.contains("Help"));
        assert!(text.contains("Quit"));
    }
}
