//! Sidebar view
//!
//! Shows the numbered step indicators

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Step;
use crate::tui::app::App;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Sign up ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    // The completed panel keeps the last indicator lit
    let current = match app.view().visible_step {
        Step::Completed => Step::Summary,
        step => step,
    };

    let mut lines = Vec::new();
    for step in Step::ACTIVE {
        let active = step == current;
        let badge_style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let caption_style = if active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", step.number()), badge_style),
            Span::raw("  "),
            Span::styled(format!("STEP {}", step.number()), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(step.caption(), caption_style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
