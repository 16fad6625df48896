//! Line chart for a sampled curve
//!
//! Draws the curve over light gridlines with both zero axes. The y range
//! always includes zero so the x axis stays visible.

use calc_core::PlotSample;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use ratatui::Frame;

use crate::ui::palette::Palette;

/// Gridline divisions per axis
const GRID_DIVISIONS: usize = 4;

/// Plot bounds with zero included and a non-empty y span
pub fn bounds(plot: &PlotSample) -> ([f64; 2], [f64; 2]) {
    let (x_min, x_max) = plot.x_bounds().unwrap_or((-10.0, 10.0));
    let (y_lo, y_hi) = plot
        .y_bounds()
        .filter(|(lo, hi)| lo.is_finite() && hi.is_finite())
        .unwrap_or((-1.0, 1.0));

    let mut y_min = y_lo.min(0.0);
    let mut y_max = y_hi.max(0.0);
    if y_max - y_min < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    }
    ([x_min, x_max], [y_min, y_max])
}

/// Interior gridline positions (ends excluded). Empty when the span itself
/// overflows.
fn grid_positions(min: f64, max: f64) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() {
        return Vec::new();
    }
    let step = span / GRID_DIVISIONS as f64;
    (1..GRID_DIVISIONS).map(|i| min + step * i as f64).collect()
}

fn axis_labels(min: f64, max: f64) -> Vec<Span<'static>> {
    let mid = (min + max) / 2.0;
    [min, mid, max]
        .iter()
        .map(|v| Span::raw(format!("{:.1}", v)))
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, plot: &PlotSample, palette: &Palette) {
    let ([x_min, x_max], [y_min, y_max]) = bounds(plot);

    let vertical_grid: Vec<[(f64, f64); 2]> = grid_positions(x_min, x_max)
        .into_iter()
        .map(|x| [(x, y_min), (x, y_max)])
        .collect();
    let horizontal_grid: Vec<[(f64, f64); 2]> = grid_positions(y_min, y_max)
        .into_iter()
        .map(|y| [(x_min, y), (x_max, y)])
        .collect();
    let x_axis = [(x_min, 0.0), (x_max, 0.0)];
    let y_axis = [(0.0, y_min), (0.0, y_max)];

    let grid_style = Style::default().fg(palette.grid);
    let axis_style = Style::default().fg(palette.muted);

    let mut datasets: Vec<Dataset> = vertical_grid
        .iter()
        .chain(horizontal_grid.iter())
        .map(|line| {
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(grid_style)
                .data(line)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(axis_style)
            .data(&x_axis),
    );
    if x_min <= 0.0 && 0.0 <= x_max {
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(axis_style)
                .data(&y_axis),
        );
    }
    datasets.push(
        Dataset::default()
            .name(plot.label.clone())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.curve))
            .data(&plot.points),
    );

    let chart = Chart::new(datasets)
        .block(
            Block::bordered()
                .title(" Gráfico ")
                .border_style(palette.dim()),
        )
        .style(palette.base())
        .x_axis(
            Axis::default()
                .title("x")
                .style(axis_style)
                .bounds([x_min, x_max])
                .labels(axis_labels(x_min, x_max)),
        )
        .y_axis(
            Axis::default()
                .title("f(x)")
                .style(axis_style)
                .bounds([y_min, y_max])
                .labels(axis_labels(y_min, y_max)),
        );

    frame.render_widget(chart, area);
}
