//! Loading view, error banner and alert popup

use super::super::state::{Alert, DashboardState};
use super::super::utils::centered_rect;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Shown in place of the table and chart until the first fetch settles.
pub fn render_loading(f: &mut Frame, area: Rect, state: &DashboardState) {
    let frame = SPINNER[(state.tick / 2) % SPINNER.len()];
    let text = vec![
        Line::from(""),
        Line::from(format!("{} Loading health data...", frame)),
        Line::from(""),
        Line::from(state.environment.data_url()),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::LightBlue))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(paragraph, area);
}

/// Replaces the table and chart while the latest fetch has failed.
pub fn render_error_banner(f: &mut Frame, area: Rect, message: &str) {
    let text = vec![
        Line::from(""),
        Line::from(message.to_string()).style(
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Retrying on the next refresh. Press [R] to retry now."),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("ERROR")
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(paragraph, area);
}

pub fn render_alert(f: &mut Frame, area: Rect, alert: &Alert) {
    let popup = centered_rect(60, 9, area);
    let text = vec![
        Line::from(""),
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from("[Enter] OK").style(Style::default().fg(Color::Gray)),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(alert.title.as_str())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::LightRed)),
        );
    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
