//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::DashboardState;

use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType, PollUpdate};
use crate::export;
use crate::logging::LogLevel;

impl DashboardState {
    /// Update the dashboard state with a new tick and any queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            if event.should_display() {
                self.add_to_activity_log(event.without_update());
            }
            if let Some(update) = event.update {
                self.apply_update(update);
            }
        }
    }

    /// Apply one poller update.
    fn apply_update(&mut self, update: PollUpdate) {
        match update {
            PollUpdate::Started { seq } => {
                self.in_flight_mut().insert(seq);
                self.fetch_state_mut().refreshing = true;
            }
            PollUpdate::Completed { seq, readings } => {
                if self.settle(seq) {
                    self.set_readings(readings);
                    self.fetch_state_mut().error = None;
                }
            }
            PollUpdate::Failed { seq, message } => {
                if self.settle(seq) {
                    self.fetch_state_mut().error = Some(message);
                }
            }
            PollUpdate::Tick => self.tick_countdown(),
        }
    }

    /// A manual refresh never reached the poller; fall back to what is actually in flight.
    pub fn refresh_dropped(&mut self) {
        let refreshing = !self.in_flight_mut().is_empty();
        self.fetch_state_mut().refreshing = refreshing;
    }

    /// Book-keeping shared by every outcome. Returns whether the outcome is current.
    fn settle(&mut self, seq: u64) -> bool {
        self.in_flight_mut().remove(&seq);
        let refreshing = !self.in_flight_mut().is_empty();
        let state = self.fetch_state_mut();
        state.loading = false;
        state.refreshing = refreshing;
        self.reset_countdown();

        if seq <= self.last_applied_seq() {
            log::debug!(
                "Discarding stale response #{} (already applied #{})",
                seq,
                self.last_applied_seq()
            );
            self.add_to_activity_log(Event::poller_with_level(
                format!("Discarded stale response #{}", seq),
                EventType::Waiting,
                LogLevel::Debug,
            ));
            return false;
        }
        self.set_last_applied_seq(seq);
        true
    }

    /// One second passed. Wraps back to the full interval instead of reaching zero.
    fn tick_countdown(&mut self) {
        let next = if self.countdown() <= 1 {
            self.refresh_interval_secs
        } else {
            self.countdown() - 1
        };
        self.set_countdown(next);
    }

    fn reset_countdown(&mut self) {
        self.set_countdown(self.refresh_interval_secs);
    }

    /// Export every held reading to CSV. Failures raise the alert.
    pub fn export_csv(&mut self) {
        match export::export_csv(self.readings(), &self.zone, &self.export_dir) {
            Ok(path) => {
                let msg = format!(
                    "Exported {} readings to {}",
                    self.readings().len(),
                    path.display()
                );
                self.add_to_activity_log(Event::exporter_with_level(
                    msg,
                    EventType::Success,
                    LogLevel::Info,
                ));
            }
            Err(e) => {
                let level = ErrorClassifier::new().classify_export_error(&e);
                self.add_to_activity_log(Event::exporter_with_level(
                    format!("Export failed: {}", e),
                    EventType::Error,
                    level,
                ));
                self.show_alert("EXPORT FAILED", e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::events::Event;
    use crate::reading::{DisplayZone, Reading};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::DashboardState;
    use crate::environment::Environment;
    use crate::logging::LogLevel;
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Instant;

    fn reading(id: &str) -> Reading {
        Reading {
            id: id.to_string(),
            temperature: 36.5,
            humidity: 50.0,
            heart_rate: 70.0,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
        }
    }

    fn batch(n: usize) -> Arc<Vec<Reading>> {
        Arc::new((0..n).map(|i| reading(&i.to_string())).collect())
    }

    fn state_with(export_dir: PathBuf) -> DashboardState {
        let config = UIConfig {
            with_background_color: false,
            refresh_interval_secs: 10,
            items_per_page: 5,
            export_dir,
            zone: DisplayZone::utc(),
        };
        DashboardState::new(Environment::Local, Instant::now(), &config)
    }

    fn state() -> DashboardState {
        state_with(PathBuf::from("."))
    }

    fn apply(state: &mut DashboardState, events: Vec<Event>) {
        for event in events {
            state.add_event(event);
        }
        state.update();
    }

    fn failed(seq: u64) -> Event {
        Event::fetch_failed(seq, "Error fetching data".into(), "boom".into(), LogLevel::Warn)
    }

    #[test]
    fn test_loading_until_first_fetch_settles() {
        let mut state = state();
        assert!(state.fetch_state().loading);
        apply(&mut state, vec![Event::fetch_started(1)]);
        assert!(state.fetch_state().loading);
        assert!(state.fetch_state().refreshing);

        apply(&mut state, vec![Event::fetch_completed(1, batch(12), "ok".into())]);
        assert!(!state.fetch_state().loading);
        assert!(!state.fetch_state().refreshing);
        assert_eq!(state.readings().len(), 12);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut state = state();
        apply(
            &mut state,
            vec![
                Event::fetch_started(1),
                Event::fetch_completed(1, batch(7), "ok".into()),
                Event::fetch_started(2),
                failed(2),
            ],
        );
        assert_eq!(state.readings().len(), 7);
        assert_eq!(
            state.fetch_state().error.as_deref(),
            Some("Error fetching data")
        );

        apply(&mut state, vec![Event::fetch_completed(3, batch(8), "ok".into())]);
        assert_eq!(state.fetch_state().error, None);
        assert_eq!(state.readings().len(), 8);
    }

    #[test]
    fn test_stale_responses_are_discarded() {
        let mut state = state();
        apply(
            &mut state,
            vec![
                Event::fetch_started(1),
                Event::fetch_started(2),
                Event::fetch_completed(2, batch(4), "ok".into()),
                Event::fetch_completed(1, batch(9), "ok".into()),
            ],
        );
        assert_eq!(state.readings().len(), 4);
        assert!(!state.fetch_state().refreshing);

        // A late failure must not raise the banner over newer data either.
        apply(&mut state, vec![failed(1)]);
        assert_eq!(state.fetch_state().error, None);
    }

    #[test]
    fn test_refreshing_while_any_fetch_outstanding() {
        let mut state = state();
        apply(
            &mut state,
            vec![
                Event::fetch_started(1),
                Event::fetch_started(2),
                Event::fetch_completed(1, batch(1), "ok".into()),
            ],
        );
        assert!(state.fetch_state().refreshing);
        apply(&mut state, vec![Event::fetch_completed(2, batch(1), "ok".into())]);
        assert!(!state.fetch_state().refreshing);
    }

    #[test]
    fn test_countdown_ticks_wraps_and_resets() {
        let mut state = state();
        assert_eq!(state.countdown(), 10);
        apply(&mut state, (0..3).map(|_| Event::countdown_tick()).collect());
        assert_eq!(state.countdown(), 7);

        apply(&mut state, vec![Event::fetch_completed(1, batch(1), "ok".into())]);
        assert_eq!(state.countdown(), 10);

        apply(&mut state, (0..9).map(|_| Event::countdown_tick()).collect());
        assert_eq!(state.countdown(), 1);
        apply(&mut state, vec![Event::countdown_tick()]);
        assert_eq!(state.countdown(), 10);
    }

    #[test]
    fn test_page_clamps_when_data_shrinks() {
        let mut state = state();
        apply(&mut state, vec![Event::fetch_completed(1, batch(20), "ok".into())]);
        state.pagination.go_to(4, 20);
        apply(&mut state, vec![Event::fetch_completed(2, batch(6), "ok".into())]);
        assert_eq!(state.pagination.current_page(), 2);
        assert_eq!(state.page_readings().len(), 1);
    }

    #[test]
    fn test_ticks_stay_out_of_activity_log() {
        let mut state = state();
        apply(&mut state, vec![Event::countdown_tick(), Event::countdown_tick()]);
        assert!(state.activity_logs.is_empty());
    }

    #[test]
    fn test_export_failure_raises_alert() {
        let mut state = state();
        state.export_csv();
        let alert = state.alert().expect("alert shown");
        assert_eq!(alert.title, "EXPORT FAILED");
    }

    #[test]
    fn test_export_writes_full_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with(dir.path().to_path_buf());
        apply(&mut state, vec![Event::fetch_completed(1, batch(12), "ok".into())]);
        state.pagination.go_to(3, 12);

        state.export_csv();
        assert!(state.alert().is_none());
        let csv = std::fs::read_to_string(dir.path().join("health-data.csv")).unwrap();
        assert_eq!(csv.lines().count(), 13);
    }
}
