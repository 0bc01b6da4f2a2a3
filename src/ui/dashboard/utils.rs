//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use crate::vitals::{Metric, Status};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Poller => Color::Cyan,
        Worker::Fetcher => Color::LightBlue,
        Worker::Exporter => Color::Green,
    }
}

pub fn status_color(status: Status) -> Color {
    match status {
        Status::Normal => Color::Green,
        Status::Warning => Color::Red,
    }
}

/// Line color of a metric's chart series.
pub fn metric_color(metric: Metric) -> Color {
    match metric {
        Metric::Temperature => Color::LightRed,
        Metric::HeartRate => Color::LightMagenta,
        Metric::Humidity => Color::LightCyan,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD HH:MM:SS from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let Some(month_day) = date_part.get(5..10) {
            return format!("{} {}", month_day, time_part);
        }
    }
    timestamp.to_string()
}

/// Rect of the given size centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2025-03-01 10:04:59"),
            "03-01 10:04:59"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));

        let clipped = centered_rect(200, 80, area);
        assert_eq!(clipped, area);
    }
}
