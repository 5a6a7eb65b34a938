//! Plan selection step
//!
//! Three plan cards side by side, the billing toggle, and the
//! plan-required banner.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::BillingCycle;
use crate::tui::app::App;
use crate::tui::layout::columns;
use crate::wizard::summary::{capitalize, price_tag};

use super::item_style;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Cards
            Constraint::Length(2), // Billing toggle
            Constraint::Length(1), // Error banner
            Constraint::Min(0),
        ])
        .split(area);

    render_cards(frame, app, chunks[0]);
    render_billing_toggle(frame, app.wizard.state().billing_cycle, chunks[1]);

    if let Some(message) = &app.view().plan_error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            chunks[2],
        );
    }
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.view();
    let Some(sheet) = &view.sheet else {
        return;
    };

    let slots = columns(area, sheet.plans.len() as u16);
    for (i, (quote, slot)) in sheet.plans.iter().zip(slots).enumerate() {
        let selected = view.selection.selected_plan == Some(quote.plan);
        let highlighted = view.plan_cursor == i;

        let border = if selected {
            Color::Cyan
        } else if highlighted {
            Color::White
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .title(format!(" {} ", i + 1))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let mut lines = vec![
            Line::from(Span::styled(
                capitalize(quote.plan.as_str()),
                item_style(highlighted, selected),
            )),
            Line::from(price_tag(quote.price, sheet.cycle, &app.currency_symbol)),
        ];
        if let Some(benefit) = quote.benefit {
            lines.push(Line::from(Span::styled(benefit, Style::default().fg(Color::Green))));
        }

        frame.render_widget(Paragraph::new(lines).block(block), slot);
    }
}

fn render_billing_toggle(frame: &mut Frame, cycle: BillingCycle, area: Rect) {
    let style_for = |c: BillingCycle| {
        if c == cycle {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let knob = match cycle {
        BillingCycle::Monthly => "(●  )",
        BillingCycle::Yearly => "(  ●)",
    };

    let line = Line::from(vec![
        Span::raw("  "),
        Span::styled(BillingCycle::Monthly.label(), style_for(BillingCycle::Monthly)),
        Span::raw("  "),
        Span::styled(knob, Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(BillingCycle::Yearly.label(), style_for(BillingCycle::Yearly)),
        Span::styled("    b to switch", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
}
