//! Sensor readings as served by the data API.
//!
//! The API is not consistent about timestamps: most deployments send an ISO-8601 string,
//! one sends a `{ "_seconds", "_nanoseconds" }` pair. Both are decoded here, at the
//! boundary, so the rest of the crate only ever sees `DateTime<Utc>`.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use serde::Deserialize;
use thiserror::Error;

/// A response body or element that does not match the readings schema.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormatError {
    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Expected a JSON array of readings, got {0}")]
    NotAnArray(&'static str),

    #[error("Malformed reading at index {index}: {reason}")]
    InvalidReading { index: usize, reason: String },

    #[error("Unparseable timestamp at index {index}: {value}")]
    InvalidTimestamp { index: usize, value: String },
}

/// One sensor sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub id: String,
    /// Body temperature in °C.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    /// Heart rate in BPM.
    pub heart_rate: f64,
    pub timestamp: DateTime<Utc>,
}

/// Timestamp encodings seen on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireTimestamp {
    Iso(String),
    Epoch {
        #[serde(rename = "_seconds", alias = "seconds")]
        seconds: i64,
        #[serde(rename = "_nanoseconds", alias = "nanoseconds", default)]
        nanoseconds: u32,
    },
}

impl WireTimestamp {
    /// Resolve to UTC. ISO strings without an offset are taken to be UTC already.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            WireTimestamp::Iso(raw) => parse_iso(raw),
            WireTimestamp::Epoch {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(*seconds, *nanoseconds),
        }
    }
}

fn parse_iso(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Deserialize)]
struct WireReading {
    #[serde(default)]
    id: Option<serde_json::Value>,
    temperature: f64,
    humidity: f64,
    heart_rate: f64,
    timestamp: WireTimestamp,
}

impl WireReading {
    fn into_reading(self, index: usize) -> Result<Reading, FormatError> {
        let timestamp = self
            .timestamp
            .to_utc()
            .ok_or_else(|| FormatError::InvalidTimestamp {
                index,
                value: match &self.timestamp {
                    WireTimestamp::Iso(raw) => raw.clone(),
                    WireTimestamp::Epoch { seconds, .. } => seconds.to_string(),
                },
            })?;
        let id = match self.id {
            Some(serde_json::Value::String(s)) => s,
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Ok(Reading {
            id,
            temperature: self.temperature,
            humidity: self.humidity,
            heart_rate: self.heart_rate,
            timestamp,
        })
    }
}

/// A decoded response body. Elements that failed to decode are reported in `skipped`
/// instead of failing the batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingBatch {
    pub readings: Vec<Reading>,
    pub skipped: Vec<FormatError>,
}

impl From<Vec<Reading>> for ReadingBatch {
    fn from(readings: Vec<Reading>) -> Self {
        Self {
            readings,
            skipped: Vec::new(),
        }
    }
}

fn decode_element(index: usize, item: serde_json::Value) -> Result<Reading, FormatError> {
    let wire: WireReading =
        serde_json::from_value(item).map_err(|e| FormatError::InvalidReading {
            index,
            reason: e.to_string(),
        })?;
    wire.into_reading(index)
}

/// Decode a response body into readings, preserving the API's newest-first order.
///
/// A malformed element is skipped with a warning. The batch only fails when the body is
/// not an array, or when it has elements and none of them decode.
pub fn decode_readings(body: &[u8]) -> Result<ReadingBatch, FormatError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| FormatError::InvalidJson(e.to_string()))?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(_) => return Err(FormatError::NotAnArray("an object")),
        serde_json::Value::String(_) => return Err(FormatError::NotAnArray("a string")),
        serde_json::Value::Number(_) => return Err(FormatError::NotAnArray("a number")),
        serde_json::Value::Bool(_) => return Err(FormatError::NotAnArray("a boolean")),
        serde_json::Value::Null => return Err(FormatError::NotAnArray("null")),
    };

    let mut batch = ReadingBatch::default();
    for (index, item) in items.into_iter().enumerate() {
        match decode_element(index, item) {
            Ok(reading) => batch.readings.push(reading),
            Err(e) => {
                log::warn!("Skipping reading: {}", e);
                batch.skipped.push(e);
            }
        }
    }

    if batch.readings.is_empty() && !batch.skipped.is_empty() {
        return Err(batch.skipped.swap_remove(0));
    }
    Ok(batch)
}

/// Fixed-offset zone readings are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone {
    offset: FixedOffset,
}

impl DisplayZone {
    /// Returns `None` for offsets of a day or more.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(|offset| Self { offset })
    }

    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Short zone name shown after times.
    pub fn label(&self) -> String {
        let secs = self.offset.local_minus_utc();
        match secs {
            0 => "UTC".to_string(),
            19_800 => "IST".to_string(),
            _ => {
                let sign = if secs < 0 { '-' } else { '+' };
                let abs = secs.abs();
                format!("UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
            }
        }
    }

    /// `dd/mm/yyyy, h:mm:ss AM IST`
    pub fn format_timestamp(&self, ts: &DateTime<Utc>) -> String {
        format!("{}, {}", self.format_date(ts), self.format_time(ts))
    }

    /// `dd/mm/yyyy`
    pub fn format_date(&self, ts: &DateTime<Utc>) -> String {
        ts.with_timezone(&self.offset).format("%d/%m/%Y").to_string()
    }

    /// `h:mm:ss AM IST`
    pub fn format_time(&self, ts: &DateTime<Utc>) -> String {
        format!(
            "{} {}",
            ts.with_timezone(&self.offset).format("%-I:%M:%S %p"),
            self.label()
        )
    }

    /// 24-hour `HH:MM:SS`, used for chart labels.
    pub fn format_time_of_day(&self, ts: &DateTime<Utc>) -> String {
        ts.with_timezone(&self.offset).format("%H:%M:%S").to_string()
    }
}
