//! CSV export of the held readings.

use crate::consts::cli_consts::export::{CSV_FILE_NAME, CSV_HEADER};
use crate::reading::{DisplayZone, Reading};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// There is nothing loaded to export yet.
    #[error("No readings loaded yet, nothing to export")]
    Empty,

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render every reading as CSV, one row each, header first.
pub fn build_csv(readings: &[Reading], zone: &DisplayZone) -> String {
    let mut csv = String::new();
    let header: Vec<String> = CSV_HEADER.iter().map(|h| escape_csv(h)).collect();
    csv.push_str(&header.join(","));
    csv.push('\n');

    for reading in readings {
        let fields = [
            zone.format_timestamp(&reading.timestamp),
            reading.temperature.to_string(),
            reading.heart_rate.to_string(),
            reading.humidity.to_string(),
        ];
        let line = fields
            .iter()
            .map(|field| escape_csv(field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write `health-data.csv` into `dir` and return its path.
pub fn export_csv(
    readings: &[Reading],
    zone: &DisplayZone,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    write_csv(readings, zone, &dir.join(CSV_FILE_NAME))
}

/// Write the CSV to an explicit file path, creating parent directories.
pub fn write_csv(
    readings: &[Reading],
    zone: &DisplayZone,
    path: &Path,
) -> Result<PathBuf, ExportError> {
    if readings.is_empty() {
        return Err(ExportError::Empty);
    }
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, build_csv(readings, zone)).map_err(io_err)?;
    log::info!("Exported {} readings to {}", readings.len(), path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn reading(id: &str, temperature: f64) -> Reading {
        Reading {
            id: id.to_string(),
            temperature,
            humidity: 55.0,
            heart_rate: 72.0,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 4, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_header_and_rows() {
        let zone = DisplayZone::from_offset_minutes(330).unwrap();
        let csv = build_csv(&[reading("a", 36.5)], &zone);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Timestamp,Temperature (°C),Heart Rate (BPM),Humidity (%)"
        );
        assert_eq!(lines[1], "\"01/03/2025, 10:00:00 AM IST\",36.5,72,55");
    }

    #[test]
    fn test_row_count_matches_dataset_not_page() {
        let data: Vec<Reading> = (0..12).map(|i| reading(&i.to_string(), 36.0)).collect();
        let csv = build_csv(&data, &DisplayZone::utc());
        assert_eq!(csv.lines().count(), data.len() + 1);
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempdir().unwrap();
        let path = export_csv(&[reading("a", 38.0)], &DisplayZone::utc(), dir.path()).unwrap();
        assert_eq!(path, dir.path().join("health-data.csv"));
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_export_rejects_empty_dataset() {
        let dir = tempdir().unwrap();
        let result = export_csv(&[], &DisplayZone::utc(), dir.path());
        assert!(matches!(result, Err(ExportError::Empty)));
    }

    #[test]
    fn test_export_reports_io_failure() {
        let dir = tempdir().unwrap();
        // a directory where the file should go
        let target = dir.path().join("health-data.csv");
        fs::create_dir(&target).unwrap();
        let result = export_csv(&[reading("a", 36.0)], &DisplayZone::utc(), dir.path());
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
