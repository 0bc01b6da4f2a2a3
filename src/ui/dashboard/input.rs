//! Keyboard handling for the dashboard

use super::state::{ActiveTab, DashboardState};
use crossterm::event::KeyCode;

/// Requests that leave the dashboard state and need the app loop to act.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DashboardAction {
    Quit,
    Refresh,
}

impl DashboardState {
    /// Apply a key press. View-only changes happen in place.
    pub fn handle_key(&mut self, code: KeyCode) -> Option<DashboardAction> {
        // A visible alert swallows everything until dismissed
        if self.alert().is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return None;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(DashboardAction::Quit),
            KeyCode::Tab | KeyCode::BackTab => self.active_tab = self.active_tab.toggle(),
            KeyCode::Char('1') => self.active_tab = ActiveTab::Dashboard,
            KeyCode::Char('2') => self.active_tab = ActiveTab::About,
            KeyCode::Char('r') => {
                if !self.fetch_state().refreshing {
                    // Held until the poller's Started arrives, so a second press is ignored
                    self.fetch_state_mut().refreshing = true;
                    return Some(DashboardAction::Refresh);
                }
            }
            KeyCode::Char('e') => self.export_csv(),
            _ if self.active_tab == ActiveTab::Dashboard => self.handle_dashboard_key(code),
            _ => {}
        }
        None
    }

    fn handle_dashboard_key(&mut self, code: KeyCode) {
        let len = self.readings().len();
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => self.pagination.prev_page(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
                self.pagination.next_page(len)
            }
            KeyCode::Home | KeyCode::Char('g') => self.pagination.first_page(),
            KeyCode::End | KeyCode::Char('G') => self.pagination.last_page_of(len),
            KeyCode::Char('p') => self.pagination.cycle_page_size(),
            KeyCode::Char('m') => self.active_metric = self.active_metric.next(),
            _ => {}
        }
    }
}
