//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
/// 3. Poller shutdown once the UI exits
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - TUI mode completed successfully
/// * `Err` - TUI mode failed
pub async fn run_tui_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting(
        "TUI",
        &session.environment,
        session.ui_config.refresh_interval_secs,
    );

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ui::App::new(
        session.environment,
        session.event_receiver,
        session.poller,
        &session.ui_config,
    );

    let result = ui::run(&mut terminal, &mut app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    print_session_shutdown();
    app.shutdown().await;

    // Handle the result
    result?;
    print_session_exit_success();

    Ok(())
}
