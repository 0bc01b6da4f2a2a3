//! Paginated readings table

use super::super::state::DashboardState;
use super::super::utils::status_color;
use crate::vitals::{Metric, classify_reading};
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};
use strum::IntoEnumIterator;

pub fn render_readings_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header = Row::new(vec![
        Cell::from("Time"),
        Cell::from("Temperature"),
        Cell::from("Heart Rate"),
        Cell::from("Humidity"),
    ])
    .style(
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = state
        .page_readings()
        .iter()
        .map(|reading| {
            let mut cells = vec![Cell::from(state.zone.format_timestamp(&reading.timestamp))];
            cells.extend(Metric::iter().map(|metric| {
                let status = classify_reading(reading, metric);
                Cell::from(metric.format_value(metric.value_of(reading)))
                    .style(Style::default().fg(status_color(status)))
            }));
            Row::new(cells)
        })
        .collect();

    let total = state.readings().len();
    let title = format!(
        "READINGS  page {}/{} | {} per page | {} total",
        state.pagination.current_page(),
        state.total_pages().max(1),
        state.pagination.page_size(),
        total
    );

    let mut nav = String::new();
    if state.pagination.has_prev() {
        nav.push_str("◀ prev ");
    }
    if state.pagination.has_next(total) {
        nav.push_str("next ▶");
    }

    let table = Table::new(
        rows,
        [
            Constraint::Min(28),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .title_bottom(Line::from(nav).right_aligned())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(table, area);
}
