//! Error handling for the sensor API module

use crate::reading::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The response body did not match the readings schema
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Network error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// Short text for the dashboard banner.
    pub fn banner_message(&self) -> String {
        match self {
            ApiError::Http { status, .. } => {
                format!("Error fetching data (HTTP {})", status)
            }
            ApiError::Reqwest(e) if e.is_timeout() => {
                "Error fetching data (request timed out)".to_string()
            }
            ApiError::Reqwest(_) => "Error fetching data (network unreachable)".to_string(),
            ApiError::Format(_) => "Error fetching data (unexpected response format)".to_string(),
        }
    }
}
