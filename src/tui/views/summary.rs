//! Finishing-up step

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::wizard::summary::{addon_price_tag, price_tag};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(summary) = &app.view().summary else {
        return;
    };
    let symbol = app.currency_symbol.as_str();
    let width = area.width as usize;

    let row = |label: String, value: String, label_style: Style, value_style: Style| {
        let gap = width
            .saturating_sub(label.chars().count() + value.chars().count() + 2)
            .max(1);
        Line::from(vec![
            Span::raw(" "),
            Span::styled(label, label_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(value, value_style),
        ])
    };

    let mut lines = vec![
        row(
            summary.plan_name.clone(),
            price_tag(summary.plan_price, summary.cycle, symbol),
            Style::default().add_modifier(Modifier::BOLD),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::raw(" "),
            Span::styled("c", Style::default().fg(Color::Yellow)),
            Span::styled(" Change", Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(
            format!(" {}", "─".repeat(width.saturating_sub(2))),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if summary.addons.is_empty() {
        lines.push(Line::from(Span::styled(
            " No add-ons selected",
            Style::default().fg(Color::Gray),
        )));
    }
    for line in &summary.addons {
        lines.push(row(
            line.name.clone(),
            addon_price_tag(line.price, summary.cycle, symbol),
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::White),
        ));
    }

    lines.push(Line::from(""));
    lines.push(row(
        summary.total_label.clone(),
        price_tag(summary.total, summary.cycle, symbol),
        Style::default().fg(Color::Gray),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(lines), area);
}
