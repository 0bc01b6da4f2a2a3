//! Event System
//!
//! Types and implementations for poller events and logging

use crate::logging::{LogLevel, should_log_with_env};
use crate::reading::{FormatError, Reading};
use chrono::Local;
use std::fmt::Display;
use std::sync::Arc;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Task that schedules fetches and drives the countdown.
    Poller,
    /// A single fetch of the readings feed.
    Fetcher,
    /// CSV export triggered from the dashboard.
    Exporter,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
    Tick,
}

/// State carried by poller events, applied by the dashboard in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum PollUpdate {
    /// A fetch with this sequence number went out.
    Started { seq: u64 },
    /// A fetch returned a batch of readings.
    Completed { seq: u64, readings: Arc<Vec<Reading>> },
    /// A fetch failed; `message` is what the banner shows.
    Failed { seq: u64, message: String },
    /// One second of countdown elapsed.
    Tick,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Optional state payload for poller events
    pub update: Option<PollUpdate>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            update: None,
        }
    }

    fn with_update(mut self, update: PollUpdate) -> Self {
        self.update = Some(update);
        self
    }

    pub fn poller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Poller, msg, event_type, log_level)
    }

    pub fn exporter_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Exporter, msg, event_type, log_level)
    }

    pub fn countdown_tick() -> Self {
        Self::new(Worker::Poller, String::new(), EventType::Tick, LogLevel::Trace)
            .with_update(PollUpdate::Tick)
    }

    pub fn fetch_started(seq: u64) -> Self {
        Self::new(
            Worker::Fetcher,
            "Fetching readings...".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
        )
        .with_update(PollUpdate::Started { seq })
    }

    pub fn fetch_completed(seq: u64, readings: Arc<Vec<Reading>>, msg: String) -> Self {
        Self::new(Worker::Fetcher, msg, EventType::Success, LogLevel::Info)
            .with_update(PollUpdate::Completed { seq, readings })
    }

    /// Activity-log line for elements of a batch that were dropped while decoding.
    pub fn readings_skipped(count: usize, first: &FormatError) -> Self {
        Self::new(
            Worker::Fetcher,
            format!("Skipped {} malformed readings ({})", count, first),
            EventType::Error,
            LogLevel::Warn,
        )
    }

    pub fn fetch_failed(seq: u64, banner: String, msg: String, log_level: LogLevel) -> Self {
        Self::new(Worker::Fetcher, msg, EventType::Error, log_level)
            .with_update(PollUpdate::Failed {
                seq,
                message: banner,
            })
    }

    /// Copy suitable for the activity log: the readings payload is dropped.
    pub fn without_update(&self) -> Self {
        Self {
            update: None,
            ..self.clone()
        }
    }

    pub fn should_display(&self) -> bool {
        // Countdown ticks never reach the log
        if self.event_type == EventType::Tick {
            return false;
        }
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_are_hidden() {
        assert!(!Event::countdown_tick().should_display());
    }

    #[test]
    fn test_completions_and_errors_are_shown() {
        let done = Event::fetch_completed(1, Arc::new(Vec::new()), "Fetched 0 readings".into());
        assert!(done.should_display());
        let failed = Event::fetch_failed(2, "banner".into(), "boom".into(), LogLevel::Warn);
        assert!(failed.should_display());
    }

    #[test]
    fn test_without_update_strips_payload() {
        let done = Event::fetch_completed(1, Arc::new(Vec::new()), "ok".into());
        let logged = done.without_update();
        assert_eq!(logged.update, None);
        assert_eq!(logged.msg, "ok");
    }

    #[test]
    fn test_display_format() {
        let event = Event::poller_with_level("hello".into(), EventType::Waiting, LogLevel::Info);
        let text = event.to_string();
        assert!(text.starts_with("Waiting ["));
        assert!(text.ends_with("] hello"));
    }
}
