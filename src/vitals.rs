//! Normal/warning classification of vital signs.

use crate::consts::cli_consts::thresholds;
use crate::reading::Reading;

/// One of the three measured quantities.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display, strum::EnumIter)]
pub enum Metric {
    #[strum(to_string = "Temperature")]
    Temperature,
    #[strum(to_string = "Heart Rate")]
    HeartRate,
    #[strum(to_string = "Humidity")]
    Humidity,
}

/// Display band of a single value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Status {
    #[strum(to_string = "normal")]
    Normal,
    #[strum(to_string = "warning")]
    Warning,
}

impl Metric {
    /// Inclusive normal range.
    pub fn normal_range(self) -> (f64, f64) {
        match self {
            Metric::Temperature => thresholds::TEMPERATURE_RANGE,
            Metric::HeartRate => thresholds::HEART_RATE_RANGE,
            Metric::Humidity => thresholds::HUMIDITY_RANGE,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::HeartRate => " BPM",
            Metric::Humidity => "%",
        }
    }

    /// The metric's value in a reading.
    pub fn value_of(self, reading: &Reading) -> f64 {
        match self {
            Metric::Temperature => reading.temperature,
            Metric::HeartRate => reading.heart_rate,
            Metric::Humidity => reading.humidity,
        }
    }

    /// Value with its unit, e.g. `36.5°C` or `72 BPM`.
    pub fn format_value(self, value: f64) -> String {
        format!("{}{}", value, self.unit())
    }
}

/// Classify a value. Boundary values are normal; only strictly-outside values warn.
pub fn classify(value: f64, metric: Metric) -> Status {
    let (low, high) = metric.normal_range();
    if value < low || value > high {
        Status::Warning
    } else {
        Status::Normal
    }
}

/// Classify one metric of a reading.
pub fn classify_reading(reading: &Reading, metric: Metric) -> Status {
    classify(metric.value_of(reading), metric)
}
