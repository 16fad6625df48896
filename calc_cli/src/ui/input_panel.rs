//! Input Panel (Left)
//!
//! Shows only the operand fields the selected operation needs. The focused
//! field is highlighted and ends with a cursor mark.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::palette::Palette;
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focused_field();

    let mut lines = Vec::new();
    for &field in app.session.visible_fields() {
        let is_focused = focused == Some(field);
        let marker = if is_focused { "› " } else { "  " };
        let value_style = if is_focused { palette.highlight() } else { palette.base() };
        let cursor = if is_focused { "▏" } else { "" };

        lines.push(Line::from(vec![
            Span::styled(marker, palette.highlight()),
            Span::styled(format!("{}: ", field.display_name()), palette.dim()),
            Span::styled(format!("{}{}", app.field_text(field), cursor), value_style),
        ]));
        lines.push(Line::default());
    }

    let block = Block::bordered()
        .title(" Entradas ")
        .border_style(palette.dim());

    frame.render_widget(Paragraph::new(lines).block(block).style(palette.base()), area);
}
