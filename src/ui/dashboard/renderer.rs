//! Dashboard main renderer

use super::components::{
    about, footer, header, info_panel, logs, readings_table, status, trend_chart,
};
use super::state::{ActiveTab, DashboardState};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    match state.active_tab {
        ActiveTab::Dashboard => render_dashboard_tab(f, main_chunks[1], state),
        ActiveTab::About => about::render_about(f, main_chunks[1]),
    }

    footer::render_footer(f, main_chunks[2], state);

    if let Some(alert) = state.alert() {
        status::render_alert(f, f.area(), alert);
    }
}

fn render_dashboard_tab(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    info_panel::render_info_panel(f, top[0], state);

    // Loading and error views replace the data panels
    let fetch_state = state.fetch_state();
    if fetch_state.loading {
        status::render_loading(f, top[1], state);
    } else if let Some(message) = &fetch_state.error {
        status::render_error_banner(f, top[1], message);
    } else {
        readings_table::render_readings_table(f, top[1], state);
    }

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    if fetch_state.loading || fetch_state.error.is_some() {
        logs::render_logs_panel(f, rows[1], state);
    } else {
        trend_chart::render_trend_chart(f, bottom[0], state);
        logs::render_logs_panel(f, bottom[1], state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::events::Event;
    use crate::logging::LogLevel;
    use crate::reading::{DisplayZone, Reading};
    use crate::ui::app::UIConfig;
    use chrono::{TimeZone, Utc};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Instant;

    fn state() -> DashboardState {
        let config = UIConfig {
            with_background_color: true,
            refresh_interval_secs: 10,
            items_per_page: 5,
            export_dir: PathBuf::from("."),
            zone: DisplayZone::from_offset_minutes(330).unwrap(),
        };
        DashboardState::new(Environment::Local, Instant::now(), &config)
    }

    fn screen(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_loading_view_before_first_fetch() {
        let state = state();
        let text = screen(&state);
        assert!(text.contains("Loading health data"));
        assert!(text.contains("N/A"));
    }

    #[test]
    fn test_table_after_fetch() {
        let mut state = state();
        let reading = Reading {
            id: "a".into(),
            temperature: 38.0,
            humidity: 55.0,
            heart_rate: 72.0,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 4, 30, 0).unwrap(),
        };
        state.add_event(Event::fetch_completed(1, Arc::new(vec![reading]), "ok".into()));
        state.update();
        let text = screen(&state);
        assert!(text.contains("READINGS"));
        assert!(text.contains("38°C"));
        assert!(text.contains("01/03/2025, 10:00:00 AM IST"));
        assert!(text.contains("TRENDS"));
    }

    #[test]
    fn test_error_banner_replaces_table() {
        let mut state = state();
        state.add_event(Event::fetch_failed(
            1,
            "Error fetching data (HTTP 503)".into(),
            "boom".into(),
            LogLevel::Warn,
        ));
        state.update();
        let text = screen(&state);
        assert!(text.contains("Error fetching data (HTTP 503)"));
        assert!(!text.contains("READINGS"));
    }

    #[test]
    fn test_about_tab_lists_team() {
        let mut state = state();
        state.active_tab = ActiveTab::About;
        let text = screen(&state);
        assert!(text.contains("TEAM MEMBERS"));
        assert!(text.contains("Pramod"));
        assert!(text.contains("Pratapa Siddhartha"));
    }
}
