//! Poll scheduling: periodic fetches, manual refreshes and the countdown tick.

use super::core::EventSender;
use super::fetcher::ReadingFetcher;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::{Instant, MissedTickBehavior, interval, interval_at};
use tokio_util::sync::CancellationToken;

/// Requests the UI can make of a running poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollCommand {
    /// Fetch now, and restart the refresh interval from here.
    Refresh,
}

/// Timer settings for one polling session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    pub refresh_interval: Duration,
    pub tick_interval: Duration,
}

impl PollerConfig {
    pub fn new(refresh_interval: Duration) -> Self {
        Self {
            refresh_interval,
            tick_interval: crate::consts::cli_consts::polling::countdown_tick(),
        }
    }
}

pub struct Poller {
    fetcher: Arc<ReadingFetcher>,
    event_sender: EventSender,
    config: PollerConfig,
    commands: mpsc::Receiver<PollCommand>,
    next_seq: u64,
}

impl Poller {
    pub fn new(
        fetcher: ReadingFetcher,
        event_sender: EventSender,
        config: PollerConfig,
        commands: mpsc::Receiver<PollCommand>,
    ) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            event_sender,
            config,
            commands,
            next_seq: 0,
        }
    }

    /// Run until `cancel` fires. In-flight fetches are aborted on the way out.
    pub async fn run(mut self, cancel: CancellationToken) {
        // First tick completes immediately, which is the on-start fetch.
        let mut refresh = interval(self.config.refresh_interval);
        refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut countdown = interval_at(
            Instant::now() + self.config.tick_interval,
            self.config.tick_interval,
        );
        countdown.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut in_flight: JoinSet<()> = JoinSet::new();

        self.event_sender
            .send_poller_event(
                format!(
                    "Polling every {}s",
                    self.config.refresh_interval.as_secs()
                ),
                EventType::Waiting,
                LogLevel::Info,
            )
            .await;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = refresh.tick() => {
                    self.spawn_fetch(&mut in_flight).await;
                }
                _ = countdown.tick() => {
                    self.event_sender.send_event(Event::countdown_tick()).await;
                }
                Some(command) = self.commands.recv() => match command {
                    PollCommand::Refresh => {
                        self.event_sender
                            .send_poller_event(
                                "Manual refresh requested".to_string(),
                                EventType::Refresh,
                                LogLevel::Info,
                            )
                            .await;
                        self.spawn_fetch(&mut in_flight).await;
                        refresh.reset();
                    }
                },
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    if let Err(e) = joined {
                        log::warn!("Fetch task ended abnormally: {}", e);
                    }
                }
            }
        }

        in_flight.abort_all();
        log::debug!("Poller stopped after {} fetches", self.next_seq);
    }

    async fn spawn_fetch(&mut self, in_flight: &mut JoinSet<()>) {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.event_sender.send_event(Event::fetch_started(seq)).await;
        let fetcher = Arc::clone(&self.fetcher);
        in_flight.spawn(async move {
            // The outcome reaches the UI as an event; nothing to do with it here.
            let _ = fetcher.fetch(seq).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::api::MockSensorApi;
    use crate::api::SensorApi;
    use crate::api::error::ApiError;
    use crate::events::{Event, PollUpdate};
    use crate::logging::LogLevel;
    use crate::reading::{DisplayZone, FormatError, Reading, ReadingBatch};
    use crate::runtime::start_poller;
    use crate::workers::poller::PollerConfig;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    fn sample() -> Reading {
        Reading {
            id: "a".into(),
            temperature: 36.5,
            humidity: 50.0,
            heart_rate: 70.0,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
        }
    }

    fn slow_config() -> PollerConfig {
        PollerConfig {
            refresh_interval: Duration::from_secs(60),
            tick_interval: Duration::from_secs(60),
        }
    }

    /// Receive events until one carries an update matching `pred`.
    async fn wait_for(
        rx: &mut mpsc::Receiver<Event>,
        pred: impl Fn(&PollUpdate) -> bool,
    ) -> PollUpdate {
        timeout(Duration::from_secs(5), async {
            loop {
                let event = rx.recv().await.expect("poller hung up");
                if let Some(update) = event.update {
                    if pred(&update) {
                        return update;
                    }
                }
            }
        })
        .await
        .expect("timed out waiting for poller event")
    }

    #[tokio::test]
    async fn test_fetches_immediately_on_start() {
        let mut api = MockSensorApi::new();
        api.expect_get_readings().returning(|| Ok(vec![sample()].into()));
        let api: Arc<dyn SensorApi> = Arc::new(api);

        let (mut rx, handle) = start_poller(api, slow_config(), DisplayZone::utc());

        let started = wait_for(&mut rx, |u| matches!(u, PollUpdate::Started { .. })).await;
        assert_eq!(started, PollUpdate::Started { seq: 1 });
        let completed = wait_for(&mut rx, |u| matches!(u, PollUpdate::Completed { .. })).await;
        match completed {
            PollUpdate::Completed { seq, readings } => {
                assert_eq!(seq, 1);
                assert_eq!(readings.as_slice(), &[sample()]);
            }
            other => panic!("unexpected update {:?}", other),
        }
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_manual_refresh_issues_next_sequence() {
        let mut api = MockSensorApi::new();
        api.expect_get_readings().returning(|| Ok(vec![sample()].into()));
        let api: Arc<dyn SensorApi> = Arc::new(api);

        let (mut rx, handle) = start_poller(api, slow_config(), DisplayZone::utc());
        wait_for(&mut rx, |u| matches!(u, PollUpdate::Completed { seq: 1, .. })).await;

        assert!(handle.request_refresh());
        let completed = wait_for(&mut rx, |u| matches!(u, PollUpdate::Completed { .. })).await;
        assert!(matches!(completed, PollUpdate::Completed { seq: 2, .. }));
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_skipped_readings_are_logged_and_rest_applied() {
        let mut api = MockSensorApi::new();
        api.expect_get_readings().returning(|| {
            Ok(ReadingBatch {
                readings: vec![sample()],
                skipped: vec![FormatError::InvalidReading {
                    index: 1,
                    reason: "invalid type: null, expected f64".into(),
                }],
            })
        });
        let api: Arc<dyn SensorApi> = Arc::new(api);

        let (mut rx, handle) = start_poller(api, slow_config(), DisplayZone::utc());
        let warning = timeout(Duration::from_secs(5), async {
            loop {
                let event = rx.recv().await.expect("poller hung up");
                if event.log_level == LogLevel::Warn {
                    return event;
                }
            }
        })
        .await
        .expect("timed out waiting for skipped-readings event");
        assert!(warning.msg.starts_with("Skipped 1 malformed readings"));

        let completed = wait_for(&mut rx, |u| matches!(u, PollUpdate::Completed { .. })).await;
        match completed {
            PollUpdate::Completed { readings, .. } => assert_eq!(readings.as_slice(), &[sample()]),
            other => panic!("unexpected update {:?}", other),
        }
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_failure_is_reported_with_banner() {
        let mut api = MockSensorApi::new();
        api.expect_get_readings().returning(|| {
            Err(ApiError::Http {
                status: 503,
                message: "unavailable".into(),
            })
        });
        let api: Arc<dyn SensorApi> = Arc::new(api);

        let (mut rx, handle) = start_poller(api, slow_config(), DisplayZone::utc());
        let failed = wait_for(&mut rx, |u| matches!(u, PollUpdate::Failed { .. })).await;
        assert_eq!(
            failed,
            PollUpdate::Failed {
                seq: 1,
                message: "Error fetching data (HTTP 503)".to_string()
            }
        );
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_countdown_ticks_are_emitted() {
        let mut api = MockSensorApi::new();
        api.expect_get_readings().returning(|| Ok(ReadingBatch::default()));
        let api: Arc<dyn SensorApi> = Arc::new(api);
        let config = PollerConfig {
            refresh_interval: Duration::from_secs(60),
            tick_interval: Duration::from_millis(20),
        };

        let (mut rx, handle) = start_poller(api, config, DisplayZone::utc());
        let tick = wait_for(&mut rx, |u| matches!(u, PollUpdate::Tick)).await;
        assert_eq!(tick, PollUpdate::Tick);
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_releases_event_channel() {
        let mut api = MockSensorApi::new();
        api.expect_get_readings().returning(|| Ok(vec![sample()].into()));
        let api: Arc<dyn SensorApi> = Arc::new(api);

        let (mut rx, handle) = start_poller(api, slow_config(), DisplayZone::utc());
        wait_for(&mut rx, |u| matches!(u, PollUpdate::Completed { .. })).await;
        handle.shutdown().await;

        // Every sender is gone once the poller task and its fetches have ended.
        let drained = timeout(Duration::from_secs(5), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }
}
