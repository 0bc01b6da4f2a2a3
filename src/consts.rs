pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the health monitor,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of event buffer size for the poller task
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Buffer size for commands sent from the UI to the poller
    pub const COMMAND_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Poll scheduling configuration
    pub mod polling {
        use std::time::Duration;

        /// Default seconds between automatic fetches
        pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 10;

        /// Upper bound accepted for the refresh interval (one hour)
        pub const MAX_REFRESH_INTERVAL_SECS: u64 = 3600;

        /// Period of the display countdown tick (milliseconds)
        pub const COUNTDOWN_TICK_MS: u64 = 1000;

        /// Connect and request timeout for the sensor API (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the countdown tick period
        pub const fn countdown_tick() -> Duration {
            Duration::from_millis(COUNTDOWN_TICK_MS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // VIEW CONFIGURATION
    // =============================================================================

    /// Table and chart sizing
    pub mod view {
        /// Page sizes offered by the readings table
        pub const PAGE_SIZES: [usize; 3] = [5, 10, 20];

        /// Default rows per page
        pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

        /// Maximum number of readings plotted on the chart
        pub const MAX_CHART_POINTS: usize = 30;

        /// Default display offset from UTC in minutes (IST, UTC+05:30)
        pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;
    }

    // =============================================================================
    // VITAL SIGN THRESHOLDS
    // =============================================================================

    /// Normal ranges; values strictly outside are flagged as warnings
    pub mod thresholds {
        /// Body temperature normal range (°C)
        pub const TEMPERATURE_RANGE: (f64, f64) = (35.0, 37.5);

        /// Heart rate normal range (BPM)
        pub const HEART_RATE_RANGE: (f64, f64) = (60.0, 100.0);

        /// Ambient humidity normal range (%)
        pub const HUMIDITY_RANGE: (f64, f64) = (30.0, 80.0);
    }

    // =============================================================================
    // EXPORT CONFIGURATION
    // =============================================================================

    /// CSV export configuration
    pub mod export {
        /// File name used for CSV exports
        pub const CSV_FILE_NAME: &str = "health-data.csv";

        /// CSV header row
        pub const CSV_HEADER: [&str; 4] = [
            "Timestamp",
            "Temperature (°C)",
            "Heart Rate (BPM)",
            "Humidity (%)",
        ];
    }
}
