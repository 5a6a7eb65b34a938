//! Help overlay
//!
//! Shows the keyboard shortcuts for the step being shown

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::Step;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help overlay
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.wizard.current_step()))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Help lines for the given step
fn help_lines(step: Step) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("Ctrl+C", "Quit"),
        key_line("Ctrl+N", "Next step"),
        key_line("Ctrl+B", "Previous step"),
        key_line("F1", "Show/hide help"),
        Line::from(""),
    ];

    match step {
        Step::Info => {
            lines.push(heading("Personal Info"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab/Down", "Next field"));
            lines.push(key_line("S-Tab/Up", "Previous field"));
            lines.push(key_line("Enter", "Validate and continue"));
        }
        Step::Plan => {
            lines.push(heading("Select Plan"));
            lines.push(Line::from(""));
            lines.push(key_line("←/→", "Move between plans"));
            lines.push(key_line("Space", "Select highlighted plan"));
            lines.push(key_line("1-3", "Select plan by number"));
            lines.push(key_line("b", "Switch monthly/yearly"));
        }
        Step::AddOns => {
            lines.push(heading("Add-ons"));
            lines.push(Line::from(""));
            lines.push(key_line("↑/↓", "Move between add-ons"));
            lines.push(key_line("Space", "Toggle highlighted add-on"));
            lines.push(key_line("1-3", "Toggle add-on by number"));
            lines.push(key_line("b", "Switch monthly/yearly"));
        }
        Step::Summary => {
            lines.push(heading("Summary"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Confirm subscription"));
            lines.push(key_line("c", "Change plan"));
            lines.push(key_line("b", "Switch monthly/yearly"));
        }
        Step::Completed => {
            lines.push(heading("Done"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter/q", "Exit"));
            lines.push(key_line("c", "Change plan"));
        }
    }

    if step != Step::Info {
        lines.push(Line::from(""));
        lines.push(key_line("Esc", "Go back"));
        lines.push(key_line("q", "Quit"));
        lines.push(key_line("?", "Show/hide help"));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
