//! Status Bar (Bottom)
//!
//! Key hints on the left, the last status message on the right.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::palette::Palette;
use crate::app::App;

const KEY_HINTS: &str = "←/→ operação  ↑/↓ campo  t tema  q sair";

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [hints_area, status_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Min(0)]).areas(area);

    frame.render_widget(Paragraph::new(KEY_HINTS).style(palette.dim()), hints_area);
    frame.render_widget(
        Paragraph::new(Line::from(app.status.as_str()).right_aligned()).style(palette.dim()),
        status_area,
    );
}
