use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::reading::ReadingBatch;

pub(crate) mod client;
pub use client::SensorApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SensorApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the current batch of readings, newest first.
    async fn get_readings(&self) -> Result<ReadingBatch, ApiError>;
}
