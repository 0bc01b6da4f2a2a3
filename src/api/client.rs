//! Sensor API Client
//!
//! Fetches the readings feed over HTTP and decodes it at the boundary.

use crate::api::SensorApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::polling;
use crate::environment::Environment;
use crate::reading::{ReadingBatch, decode_readings};
use reqwest::{Client, ClientBuilder, Response};

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("health-monitor/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SensorApiClient {
    client: Client,
    environment: Environment,
}

impl SensorApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(polling::request_timeout())
            .timeout(polling::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl SensorApi for SensorApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_readings(&self) -> Result<ReadingBatch, ApiError> {
        let url = self.environment.data_url();
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        let batch = decode_readings(&body)?;
        log::debug!(
            "Decoded {} readings from {} ({} skipped)",
            batch.readings.len(),
            url,
            batch.skipped.len()
        );
        Ok(batch)
    }
}
