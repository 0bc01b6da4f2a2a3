//! Dashboard info panel component
//!
//! Renders feed and session information

use crate::environment::Environment;
use crate::vitals::{Metric, Status, classify_reading};

use super::super::state::DashboardState;
use super::super::utils::status_color;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use strum::IntoEnumIterator;
use std::time::Duration;

/// Render info panel.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut info_lines = Vec::new();

    let last_updated = state
        .readings()
        .first()
        .map(|latest| state.zone.format_timestamp(&latest.timestamp))
        .unwrap_or_else(|| "N/A".to_string());
    info_lines.push(Line::from(vec![
        Span::styled("Last updated: ", Style::default().fg(Color::Gray)),
        Span::styled(last_updated, Style::default().fg(Color::Yellow)),
    ]));

    info_lines.push(Line::from(vec![
        Span::styled("Readings: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.readings().len().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    // Overall state of the newest reading
    if let Some(latest) = state.readings().first() {
        let warnings = Metric::iter()
            .filter(|metric| classify_reading(latest, *metric) == Status::Warning)
            .count();
        let (text, status) = if warnings == 0 {
            ("All vitals normal".to_string(), Status::Normal)
        } else {
            (format!("{} vital(s) out of range", warnings), Status::Warning)
        };
        info_lines.push(Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Gray)),
            Span::styled(text, Style::default().fg(status_color(status))),
        ]));
    }

    let env_color = match state.environment {
        Environment::Production => Color::Green,
        Environment::Local => Color::LightBlue,
        Environment::Custom { .. } => Color::Yellow,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )]));
    info_lines.push(Line::from(vec![Span::styled(
        format!("Endpoint: {}", state.environment.data_url()),
        Style::default().fg(Color::Cyan),
    )]));
    info_lines.push(Line::from(vec![Span::styled(
        format!(
            "Interval: {}s | Zone: {}",
            state.refresh_interval_secs,
            state.zone.label()
        ),
        Style::default().fg(Color::LightCyan),
    )]));

    info_lines.push(Line::from(vec![Span::styled(
        format!("Uptime: {}", format_uptime(state.start_time.elapsed())),
        Style::default().fg(Color::LightGreen),
    )]));

    let info_block = Block::default()
        .title("FEED INFO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}

fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!(
            "{}d {}h {}m",
            secs / 86400,
            (secs % 86400) / 3600,
            (secs % 3600) / 60
        )
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
