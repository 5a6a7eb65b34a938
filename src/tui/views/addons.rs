//! Add-on selection step

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::rows;
use crate::wizard::summary::{addon_price_tag, title_case_identifier};

use super::item_style;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.view();
    let Some(sheet) = &view.sheet else {
        return;
    };

    let slots = rows(area, 4, sheet.addons.len() as u16);
    for (i, (quote, slot)) in sheet.addons.iter().zip(slots).enumerate() {
        let selected = view.selection.has_addon(quote.addon);
        let highlighted = view.addon_cursor == i;

        let border = if selected { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let checkbox = if selected { "[x] " } else { "[ ] " };
        let name = title_case_identifier(quote.addon.as_str());
        let price = addon_price_tag(quote.price, sheet.cycle, &app.currency_symbol);

        let inner_width = slot.width.saturating_sub(2) as usize;
        let used = checkbox.len() + name.chars().count() + price.chars().count();
        let gap = " ".repeat(inner_width.saturating_sub(used).max(1));

        let lines = vec![
            Line::from(vec![
                Span::styled(checkbox, Style::default().fg(Color::Cyan)),
                Span::styled(name, item_style(highlighted, selected)),
                Span::raw(gap),
                Span::styled(price, Style::default().fg(Color::Cyan)),
            ]),
            Line::from(Span::styled(
                format!("    {}", quote.addon.description()),
                Style::default().fg(Color::Gray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), slot);
    }
}
