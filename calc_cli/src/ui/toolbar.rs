//! Toolbar
//!
//! Title, operation selector and current theme.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::palette::Palette;
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let operation = app.session.operation();
    let theme = app.session.theme();

    let line = Line::from(vec![
        Span::styled("Operação: ", palette.dim()),
        Span::styled("◀ ", palette.dim()),
        Span::styled(operation.display_name(), palette.highlight()),
        Span::styled(" ▶", palette.dim()),
        Span::raw("    "),
        Span::styled("Tema: ", palette.dim()),
        Span::raw(theme.display_name()),
    ]);

    let block = Block::bordered()
        .title(Span::styled(" Calculadora ", palette.highlight()))
        .border_style(palette.dim());

    frame.render_widget(Paragraph::new(line).block(block).style(palette.base()), area);
}
