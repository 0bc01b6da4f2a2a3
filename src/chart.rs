//! Chart series derived from the newest readings.

use crate::consts::cli_consts::view::MAX_CHART_POINTS;
use crate::reading::{DisplayZone, Reading};
use crate::vitals::Metric;
use strum::IntoEnumIterator;

/// Which series the chart shows.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, strum::Display)]
pub enum ActiveMetric {
    #[default]
    #[strum(to_string = "All")]
    All,
    #[strum(to_string = "Temperature")]
    Temperature,
    #[strum(to_string = "Heart Rate")]
    HeartRate,
    #[strum(to_string = "Humidity")]
    Humidity,
}

impl ActiveMetric {
    pub fn shows(self, metric: Metric) -> bool {
        match self {
            ActiveMetric::All => true,
            ActiveMetric::Temperature => metric == Metric::Temperature,
            ActiveMetric::HeartRate => metric == Metric::HeartRate,
            ActiveMetric::Humidity => metric == Metric::Humidity,
        }
    }

    /// Next selection in toolbar order: temperature, heart rate, humidity, all.
    pub fn next(self) -> Self {
        match self {
            ActiveMetric::Temperature => ActiveMetric::HeartRate,
            ActiveMetric::HeartRate => ActiveMetric::Humidity,
            ActiveMetric::Humidity => ActiveMetric::All,
            ActiveMetric::All => ActiveMetric::Temperature,
        }
    }
}

/// Per-metric points in chronological order; x is the sample index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub temperature: Vec<(f64, f64)>,
    pub heart_rate: Vec<(f64, f64)>,
    pub humidity: Vec<(f64, f64)>,
}

impl ChartSeries {
    /// Build from newest-first readings, keeping at most the latest 30.
    pub fn build(readings: &[Reading], zone: &DisplayZone) -> Self {
        Self::build_with_limit(readings, zone, MAX_CHART_POINTS)
    }

    pub fn build_with_limit(readings: &[Reading], zone: &DisplayZone, limit: usize) -> Self {
        let recent: Vec<&Reading> = readings.iter().take(limit).rev().collect();
        let mut series = ChartSeries {
            labels: Vec::with_capacity(recent.len()),
            temperature: Vec::with_capacity(recent.len()),
            heart_rate: Vec::with_capacity(recent.len()),
            humidity: Vec::with_capacity(recent.len()),
        };
        for (i, reading) in recent.into_iter().enumerate() {
            let x = i as f64;
            series
                .labels
                .push(zone.format_time_of_day(&reading.timestamp));
            series.temperature.push((x, reading.temperature));
            series.heart_rate.push((x, reading.heart_rate));
            series.humidity.push((x, reading.humidity));
        }
        series
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn points(&self, metric: Metric) -> &[(f64, f64)] {
        match metric {
            Metric::Temperature => &self.temperature,
            Metric::HeartRate => &self.heart_rate,
            Metric::Humidity => &self.humidity,
        }
    }

    /// Series visible under the current selection.
    pub fn visible(&self, active: ActiveMetric) -> Vec<(Metric, &[(f64, f64)])> {
        Metric::iter()
            .filter(|metric| active.shows(*metric))
            .map(|metric| (metric, self.points(metric)))
            .collect()
    }

    /// Y range covering the visible series with a little headroom.
    pub fn y_bounds(&self, active: ActiveMetric) -> [f64; 2] {
        let (min, max) = self
            .visible(active)
            .iter()
            .flat_map(|(_, points)| points.iter().map(|(_, y)| *y))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
                (lo.min(y), hi.max(y))
            });
        if !min.is_finite() || !max.is_finite() {
            return [0.0, 1.0];
        }
        let pad = ((max - min) * 0.1).max(1.0);
        [min - pad, max + pad]
    }

    /// First, middle and last time labels for the x axis.
    pub fn axis_labels(&self) -> Vec<String> {
        match self.labels.len() {
            0 => Vec::new(),
            1 => vec![self.labels[0].clone()],
            n => vec![
                self.labels[0].clone(),
                self.labels[n / 2].clone(),
                self.labels[n - 1].clone(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn readings(n: usize) -> Vec<Reading> {
        let base = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        // newest first, like the API
        (0..n)
            .rev()
            .map(|i| Reading {
                id: i.to_string(),
                temperature: 36.0 + i as f64 / 10.0,
                humidity: 50.0,
                heart_rate: 70.0 + i as f64,
                timestamp: base + Duration::seconds(i as i64),
            })
            .collect()
    }

    #[test]
    fn test_keeps_latest_thirty_in_chronological_order() {
        let data = readings(40);
        let series = ChartSeries::build(&data, &DisplayZone::utc());
        assert_eq!(series.len(), 30);
        // oldest kept sample is #10, newest is #39
        assert_eq!(series.heart_rate.first(), Some(&(0.0, 80.0)));
        assert_eq!(series.heart_rate.last(), Some(&(29.0, 109.0)));
        assert_eq!(series.labels.first().map(String::as_str), Some("10:00:10"));
        assert_eq!(series.labels.last().map(String::as_str), Some("10:00:39"));
    }

    #[test]
    fn test_short_data_uses_everything() {
        let series = ChartSeries::build(&readings(3), &DisplayZone::utc());
        assert_eq!(series.len(), 3);
        assert_eq!(series.axis_labels().len(), 3);
        assert!(ChartSeries::build(&[], &DisplayZone::utc()).is_empty());
    }

    #[test]
    fn test_toggling_metric_filters_series() {
        let series = ChartSeries::build(&readings(5), &DisplayZone::utc());
        assert_eq!(series.visible(ActiveMetric::All).len(), 3);
        let only_hr = series.visible(ActiveMetric::HeartRate);
        assert_eq!(only_hr.len(), 1);
        assert_eq!(only_hr[0].0, Metric::HeartRate);
        assert_eq!(only_hr[0].1.len(), 5);
    }

    #[test]
    fn test_y_bounds_follow_visible_series() {
        let series = ChartSeries::build(&readings(5), &DisplayZone::utc());
        let [lo, hi] = series.y_bounds(ActiveMetric::HeartRate);
        assert!(lo < 70.0 && hi > 74.0);
        let [lo, hi] = series.y_bounds(ActiveMetric::Temperature);
        assert!(lo < 36.0 && hi < 40.0);
        assert_eq!(
            ChartSeries::default().y_bounds(ActiveMetric::All),
            [0.0, 1.0]
        );
    }

    #[test]
    fn test_metric_cycle_visits_every_option() {
        let mut active = ActiveMetric::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            active = active.next();
            seen.push(active);
        }
        assert_eq!(seen.last(), Some(&ActiveMetric::All));
        assert!(seen.contains(&ActiveMetric::Humidity));
    }
}
