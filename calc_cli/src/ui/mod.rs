//! UI module for the interactive calculator
//!
//! # Panel Structure
//! - `toolbar` - Title, operation selector, theme
//! - `input_panel` - Left: operand fields for the selected operation
//! - `results_panel` - Right: outcome text and, for functions, the chart
//! - `status_bar` - Bottom: key hints and status messages
//!
//! # Shared Components
//! - `shared/chart` - Line chart with gridlines and zero axes
//! - `palette` - Light/dark colors

pub mod input_panel;
pub mod palette;
pub mod results_panel;
pub mod shared;
pub mod status_bar;
pub mod toolbar;

use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::App;
use palette::Palette;

/// Draw the whole screen
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.session.theme());
    let area = frame.area();

    frame.render_widget(Block::new().style(palette.base()), area);

    let [toolbar_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let [input_area, results_area] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .areas(body_area);

    toolbar::render(frame, toolbar_area, app, &palette);
    input_panel::render(frame, input_area, app, &palette);
    results_panel::render(frame, results_area, app, &palette);
    status_bar::render(frame, status_area, app, &palette);
}
