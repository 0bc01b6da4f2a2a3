//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::logging::init_console_logger;
use std::error::Error;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Ctrl+C shutdown handling
/// 3. Poller shutdown
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    init_console_logger();
    print_session_starting(
        "headless",
        &session.environment,
        session.ui_config.refresh_interval_secs,
    );

    // Event loop: log events to console until Ctrl+C
    loop {
        tokio::select! {
            event = session.event_receiver.recv() => match event {
                Some(event) => {
                    if event.should_display() {
                        println!("{}", event);
                    }
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    print_session_shutdown();
    drop(session.event_receiver);
    session.poller.shutdown().await;
    print_session_exit_success();

    Ok(())
}
