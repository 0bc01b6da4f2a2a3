//! Single fetch of the readings feed

use super::core::EventSender;
use crate::api::SensorApi;
use crate::api::error::ApiError;
use crate::error_classifier::ErrorClassifier;
use crate::events::Event;
use crate::reading::{DisplayZone, FormatError, Reading};
use crate::vitals::{Metric, classify_reading};
use std::sync::Arc;
use strum::IntoEnumIterator;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure or non-2xx status
    #[error("Network error: {0}")]
    Network(ApiError),

    /// Body was not an array of readings
    #[error("Format error: {0}")]
    Format(FormatError),
}

impl From<ApiError> for FetchError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Format(e) => FetchError::Format(e),
            other => FetchError::Network(other),
        }
    }
}

/// Fetches one batch and reports the outcome as an event
pub struct ReadingFetcher {
    api: Arc<dyn SensorApi>,
    event_sender: EventSender,
    classifier: ErrorClassifier,
    zone: DisplayZone,
}

impl ReadingFetcher {
    pub fn new(api: Arc<dyn SensorApi>, event_sender: EventSender, zone: DisplayZone) -> Self {
        Self {
            api,
            event_sender,
            classifier: ErrorClassifier::new(),
            zone,
        }
    }

    /// Fetch readings for request `seq` and publish the completion or failure.
    pub async fn fetch(&self, seq: u64) -> Result<Arc<Vec<Reading>>, FetchError> {
        match self.api.get_readings().await {
            Ok(batch) => {
                if let Some(first) = batch.skipped.first() {
                    self.event_sender
                        .send_event(Event::readings_skipped(batch.skipped.len(), first))
                        .await;
                }
                let readings = batch.readings;
                let msg = summarize(&readings, &self.zone);
                let readings = Arc::new(readings);
                self.event_sender
                    .send_event(Event::fetch_completed(seq, Arc::clone(&readings), msg))
                    .await;
                Ok(readings)
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                log::debug!("Fetch #{} failed: {}", seq, e);
                self.event_sender
                    .send_event(Event::fetch_failed(
                        seq,
                        e.banner_message(),
                        format!("Failed to fetch readings: {}", e),
                        log_level,
                    ))
                    .await;
                Err(e.into())
            }
        }
    }
}

/// One-line description of a batch, led by its newest reading.
pub fn summarize(readings: &[Reading], zone: &DisplayZone) -> String {
    let Some(latest) = readings.first() else {
        return "Fetched 0 readings".to_string();
    };
    let vitals = Metric::iter()
        .map(|metric| {
            format!(
                "{} ({})",
                metric.format_value(metric.value_of(latest)),
                classify_reading(latest, metric)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Fetched {} readings; latest {} at {}",
        readings.len(),
        vitals,
        zone.format_time(&latest.timestamp)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_summarize_latest_reading() {
        let readings = vec![Reading {
            id: "a".into(),
            temperature: 38.0,
            humidity: 55.0,
            heart_rate: 72.0,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 4, 30, 0).unwrap(),
        }];
        assert_eq!(
            summarize(&readings, &DisplayZone::utc()),
            "Fetched 1 readings; latest 38°C (warning), 72 BPM (normal), 55% (normal) at 4:30:00 AM UTC"
        );
        assert_eq!(summarize(&[], &DisplayZone::utc()), "Fetched 0 readings");
    }

    #[test]
    fn test_format_errors_are_not_network_errors() {
        let err: FetchError = ApiError::Format(FormatError::NotAnArray("null")).into();
        assert!(matches!(err, FetchError::Format(_)));
        let err: FetchError = ApiError::Http {
            status: 500,
            message: String::new(),
        }
        .into();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
