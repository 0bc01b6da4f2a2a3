//! Dashboard footer component
//!
//! Renders key hints for the active tab

use super::super::state::{ActiveTab, DashboardState};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with the keys that apply right now.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer_text = if state.alert().is_some() {
        "[Enter] Dismiss"
    } else {
        match state.active_tab {
            ActiveTab::Dashboard => {
                "[Q] Quit | [Tab] About | [R] Refresh | [E] Export CSV | [←/→] Page | [Home/End] First/Last | [P] Page size | [M] Metric"
            }
            ActiveTab::About => "[Q] Quit | [Tab] Dashboard | [R] Refresh | [E] Export CSV",
        }
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
