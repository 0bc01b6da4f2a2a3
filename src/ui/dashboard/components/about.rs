//! About tab: project overview and team

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

const OVERVIEW: &str = "An IoT health monitoring system built on an ESP32 microcontroller. \
A DHT11 temperature and humidity sensor and a heart rate sensor collect vital data, which is:";

const FEATURES: [&str; 4] = [
    "Displayed on an OLED screen for immediate viewing.",
    "Monitored remotely via the Blynk app with real-time updates on a mobile device.",
    "Sent as an SMS alert through Twilio when abnormal values are detected.",
    "Posted to a web endpoint, which this dashboard polls.",
];

const CLOSING: &str = "Tracking across several surfaces gives real-time alerts and easy access, \
suited to patient care, elderly monitoring and health awareness in remote areas.";

const ARCHITECTURE: [&str; 4] = [
    "Sensors (DHT11, pulse) -> ESP32",
    "ESP32 -> OLED | Blynk | Twilio SMS",
    "ESP32 -> HTTP API (/api/data)",
    "HTTP API -> this dashboard (poll, table, chart, CSV)",
];

/// Mentor first, then the team.
const TEAM: [(&str, &str); 6] = [
    ("Pramod", "Mentor"),
    ("Nalgonda Lokesh", "Team Leader"),
    ("Loukith Jaiswal", "Team Member"),
    ("Vardhan Boya", "Team Member"),
    ("Pranay Shuhas", "Team Member"),
    ("Pratapa Siddhartha", "Team Member"),
];

pub fn render_about(f: &mut Frame, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let heading = Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);

    let mut overview = vec![Line::from(OVERVIEW), Line::from("")];
    overview.extend(
        FEATURES
            .iter()
            .map(|feature| Line::from(format!("  • {}", feature))),
    );
    overview.push(Line::from(""));
    overview.push(Line::from(CLOSING));
    overview.push(Line::from(""));
    overview.push(Line::from(Span::styled("System Architecture", heading)));
    overview.extend(
        ARCHITECTURE
            .iter()
            .map(|step| Line::from(Span::styled(format!("  {}", step), Style::default().fg(Color::Cyan)))),
    );

    let overview_block = Block::default()
        .title("PROJECT OVERVIEW")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    f.render_widget(
        Paragraph::new(overview)
            .block(overview_block)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let team: Vec<Line> = TEAM
        .iter()
        .enumerate()
        .flat_map(|(i, (name, role))| {
            let name_style = if i == 0 {
                heading
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            let initial = name.chars().next().unwrap_or(' ');
            vec![
                Line::from(vec![
                    Span::styled(format!("({}) ", initial), Style::default().fg(Color::Cyan)),
                    Span::styled(*name, name_style),
                ]),
                Line::from(Span::styled(
                    format!("    {}", role),
                    Style::default().fg(Color::Gray),
                )),
            ]
        })
        .collect();

    let team_block = Block::default()
        .title("TEAM MEMBERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    f.render_widget(
        Paragraph::new(team).block(team_block).wrap(Wrap { trim: false }),
        chunks[1],
    );
}
