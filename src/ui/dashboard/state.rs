//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::chart::{ActiveMetric, ChartSeries};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event;
use crate::pagination::Pagination;
use crate::reading::{DisplayZone, Reading};
use crate::ui::app::UIConfig;

use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Top-level tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Dashboard,
    About,
}

impl ActiveTab {
    pub fn toggle(self) -> Self {
        match self {
            ActiveTab::Dashboard => ActiveTab::About,
            ActiveTab::About => ActiveTab::Dashboard,
        }
    }

    pub fn index(self) -> usize {
        match self {
            ActiveTab::Dashboard => 0,
            ActiveTab::About => 1,
        }
    }
}

/// Progress of the fetch cycle as the user sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchState {
    /// True until the first fetch settles.
    pub loading: bool,
    /// True while any fetch is outstanding.
    pub refreshing: bool,
    /// Banner text of the latest failure; cleared by the next success.
    pub error: Option<String>,
}

impl Default for FetchState {
    fn default() -> Self {
        Self {
            loading: true,
            refreshing: false,
            error: None,
        }
    }
}

/// Modal message that holds all input until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Dashboard state, owned by the UI loop.
#[derive(Debug)]
pub struct DashboardState {
    /// Where readings come from.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Zone timestamps are rendered in.
    pub zone: DisplayZone,
    /// Directory CSV exports are written to.
    pub export_dir: PathBuf,
    /// Seconds between automatic fetches; also the countdown start value.
    pub refresh_interval_secs: u64,
    /// Table page window.
    pub pagination: Pagination,
    pub active_tab: ActiveTab,
    pub active_metric: ActiveMetric,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,

    /// Latest applied batch, newest first.
    readings: Arc<Vec<Reading>>,
    /// Chart series derived from `readings`.
    chart: ChartSeries,
    /// Seconds until the next automatic fetch, display only.
    countdown: u64,
    fetch_state: FetchState,
    /// Sequence numbers of fetches that have started but not settled.
    in_flight: HashSet<u64>,
    /// Sequence of the newest outcome applied; older outcomes are stale.
    last_applied_seq: u64,
    alert: Option<Alert>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: &UIConfig) -> Self {
        Self {
            environment,
            start_time,
            with_background_color: ui_config.with_background_color,
            zone: ui_config.zone,
            export_dir: ui_config.export_dir.clone(),
            refresh_interval_secs: ui_config.refresh_interval_secs,
            pagination: Pagination::new(ui_config.items_per_page),
            active_tab: ActiveTab::default(),
            active_metric: ActiveMetric::default(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,

            readings: Arc::new(Vec::new()),
            chart: ChartSeries::default(),
            countdown: ui_config.refresh_interval_secs,
            fetch_state: FetchState::default(),
            in_flight: HashSet::new(),
            last_applied_seq: 0,
            alert: None,
        }
    }

    // Getter methods for private fields
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Rows on the current page.
    pub fn page_readings(&self) -> &[Reading] {
        self.pagination.slice(&self.readings)
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.readings.len())
    }

    pub fn chart(&self) -> &ChartSeries {
        &self.chart
    }

    pub fn countdown(&self) -> u64 {
        self.countdown
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch_state
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    // Setter methods for private fields (for updaters)
    pub(super) fn set_readings(&mut self, readings: Arc<Vec<Reading>>) {
        self.chart = ChartSeries::build(&readings, &self.zone);
        self.readings = readings;
        self.pagination.clamp_to(self.readings.len());
    }

    pub(super) fn fetch_state_mut(&mut self) -> &mut FetchState {
        &mut self.fetch_state
    }

    pub(super) fn in_flight_mut(&mut self) -> &mut HashSet<u64> {
        &mut self.in_flight
    }

    pub(super) fn last_applied_seq(&self) -> u64 {
        self.last_applied_seq
    }

    pub(super) fn set_last_applied_seq(&mut self, seq: u64) {
        self.last_applied_seq = seq;
    }

    pub(super) fn set_countdown(&mut self, countdown: u64) {
        self.countdown = countdown;
    }

    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.alert = Some(Alert {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}
