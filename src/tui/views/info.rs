//! Personal info step

use ratatui::{layout::Rect, Frame};

use crate::models::ContactField;
use crate::tui::app::App;
use crate::tui::layout::rows;

/// Render the three contact inputs
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let slots = rows(area, 3, ContactField::ALL.len() as u16);
    for (field, slot) in ContactField::ALL.iter().zip(slots) {
        frame.render_widget(app.view().input(*field), slot);
    }
}
