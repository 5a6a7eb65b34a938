//! Completion panel

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::models::Step;
use crate::tui::app::App;
use crate::wizard::COMPLETION_MESSAGE;

pub fn render(frame: &mut Frame, _app: &App, area: Rect) {
    let top = area.height.saturating_sub(6) / 2;
    let mut lines: Vec<Line> = (0..top).map(|_| Line::from("")).collect();

    lines.push(Line::from(Span::styled(
        "✓",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        Step::Completed.title(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        COMPLETION_MESSAGE,
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter to exit, c to change plan",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
