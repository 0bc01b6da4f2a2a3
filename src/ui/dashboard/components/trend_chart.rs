//! Line chart over the newest readings

use super::super::state::DashboardState;
use super::super::utils::metric_color;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

pub fn render_trend_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chart = state.chart();
    let block = Block::default()
        .title(format!(
            "TRENDS  last {} readings | [M] {}",
            chart.len(),
            state.active_metric
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if chart.is_empty() {
        f.render_widget(Paragraph::new("No readings yet").block(block), area);
        return;
    }

    let datasets: Vec<Dataset> = chart
        .visible(state.active_metric)
        .into_iter()
        .map(|(metric, points)| {
            Dataset::default()
                .name(metric.to_string())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(metric_color(metric)))
                .data(points)
        })
        .collect();

    let [y_min, y_max] = chart.y_bounds(state.active_metric);
    let x_max = chart.len().saturating_sub(1).max(1) as f64;

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(
                    chart
                        .axis_labels()
                        .into_iter()
                        .map(Span::from)
                        .collect::<Vec<_>>(),
                ),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::from(format!("{:.0}", y_min)),
                    Span::from(format!("{:.0}", (y_min + y_max) / 2.0)),
                    Span::from(format!("{:.0}", y_max)),
                ]),
        );
    f.render_widget(widget, area);
}
