//! Dashboard header component
//!
//! Renders the title, the tab bar and the refresh countdown gauge

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Tabs};

/// Render header with title, tabs and countdown.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("IOT HEALTH MONITOR v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let bar_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Fill(1)])
        .split(header_chunks[1]);

    let tabs = Tabs::new(vec![Line::from("[1] Dashboard"), Line::from("[2] About")])
        .select(state.active_tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(tabs, bar_chunks[0]);

    let (label, color) = if state.fetch_state().refreshing {
        ("REFRESHING".to_string(), Color::LightGreen)
    } else {
        (
            format!("Next refresh in {}s", state.countdown()),
            Color::LightBlue,
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .ratio(countdown_ratio(state.countdown(), state.refresh_interval_secs))
        .label(label);
    f.render_widget(gauge, bar_chunks[1]);
}

/// Fill of the countdown gauge, clamped to `[0, 1]`.
fn countdown_ratio(countdown: u64, interval: u64) -> f64 {
    if interval == 0 {
        return 0.0;
    }
    (countdown as f64 / interval as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_ratio() {
        assert_eq!(countdown_ratio(10, 10), 1.0);
        assert_eq!(countdown_ratio(5, 10), 0.5);
        assert_eq!(countdown_ratio(3, 0), 0.0);
        assert_eq!(countdown_ratio(40, 30), 1.0);
    }
}
