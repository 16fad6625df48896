//! Results Panel (Right)
//!
//! Renders the outcome text verbatim. When the outcome carries a plot, the
//! chart fills the space below the text.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Text;
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::palette::Palette;
use super::shared::chart;
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let outcome = app.outcome();

    let text_style = if outcome.is_success() {
        palette.base()
    } else {
        Style::default().fg(palette.error).bg(palette.background)
    };

    let text = Text::from(outcome.text());
    // Borders take two rows
    let text_height = text.lines.len() as u16 + 2;

    let paragraph = Paragraph::new(text)
        .style(text_style)
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .title(" Resultado ")
                .border_style(palette.dim()),
        );

    match outcome.plot() {
        Some(plot) => {
            let [text_area, chart_area] =
                Layout::vertical([Constraint::Length(text_height), Constraint::Min(0)]).areas(area);
            frame.render_widget(paragraph, text_area);
            chart::render(frame, chart_area, plot, palette);
        }
        None => frame.render_widget(paragraph, area),
    }
}
