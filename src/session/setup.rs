//! Session setup and initialization

use crate::api::{SensorApi, SensorApiClient};
use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::{PollerHandle, start_poller};
use crate::ui::UIConfig;
use crate::workers::poller::PollerConfig;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for poller events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Owns the poller; shut it down to stop both timers
    pub poller: PollerHandle,
    /// Where readings come from
    pub environment: Environment,
    /// Display settings for the dashboard
    pub ui_config: UIConfig,
}

/// Sets up a polling session
///
/// This function handles the setup shared by TUI and headless modes:
/// 1. Builds the HTTP client for the resolved environment
/// 2. Starts the poller, which fetches immediately
/// 3. Returns session data for mode-specific handling
///
/// # Arguments
/// * `env` - Environment to poll
/// * `ui_config` - Display settings, including the refresh interval
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session(env: Environment, ui_config: UIConfig) -> Result<SessionData, Box<dyn Error>> {
    let client = SensorApiClient::new(env.clone())?;
    let api: Arc<dyn SensorApi> = Arc::new(client);

    let poller_config = PollerConfig::new(Duration::from_secs(ui_config.refresh_interval_secs));
    let (event_receiver, poller) = start_poller(api, poller_config, ui_config.zone);

    Ok(SessionData {
        event_receiver,
        poller,
        environment: env,
        ui_config,
    })
}
