use crate::api::error::ApiError;
use crate::export::ExportError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Non-critical: Temporary server issues
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: wrong endpoint, auth, malformed responses
            ApiError::Http { status, .. } if (400..=499).contains(status) => LogLevel::Error,
            ApiError::Format(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }

    pub fn classify_export_error(&self, error: &ExportError) -> LogLevel {
        match error {
            ExportError::Empty => LogLevel::Warn,
            ExportError::Io { .. } => LogLevel::Error,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::FormatError;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_fetch_error_levels() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(429)), LogLevel::Debug);
        assert_eq!(classifier.classify_fetch_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(404)), LogLevel::Error);
        assert_eq!(
            classifier.classify_fetch_error(&ApiError::Format(FormatError::NotAnArray("null"))),
            LogLevel::Error
        );
    }

    #[test]
    fn test_export_error_levels() {
        let classifier = ErrorClassifier::default();
        assert_eq!(
            classifier.classify_export_error(&ExportError::Empty),
            LogLevel::Warn
        );
    }
}
