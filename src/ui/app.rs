//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::{Event as WorkerEvent, EventType};
use crate::logging::LogLevel;
use crate::reading::DisplayZone;
use crate::runtime::PollerHandle;
use crate::ui::dashboard::{DashboardAction, DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub refresh_interval_secs: u64,
    pub items_per_page: usize,
    pub export_dir: PathBuf,
    pub zone: DisplayZone,
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard with the readings table, chart and about tab.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state. Events are applied even while the splash shows.
    state: DashboardState,

    /// Receives events from the poller.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Owns the poller task and its timers.
    poller: PollerHandle,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        poller: PollerHandle,
        ui_config: &UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            state: DashboardState::new(environment, Instant::now(), ui_config),
            event_receiver,
            poller,
        }
    }

    /// Stop the poller and wait for it to wind down.
    pub async fn shutdown(self) {
        // Nobody reads events past this point; a closed channel fails pending sends at once
        drop(self.event_receiver);
        self.poller.shutdown().await;
    }

    fn request_refresh(&mut self) {
        if !self.poller.request_refresh() {
            self.state.refresh_dropped();
            self.state.add_to_activity_log(WorkerEvent::poller_with_level(
                "Refresh request dropped, poller busy".to_string(),
                EventType::Waiting,
                LogLevel::Warn,
            ));
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.state.add_event(event);
        }
        app.state.update();

        terminal.draw(|f| render(f, app.current_screen, &app.state))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                match app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            return Ok(());
                        }
                        // Any other key skips the splash screen
                        app.current_screen = Screen::Dashboard;
                    }
                    Screen::Dashboard => match app.state.handle_key(key.code) {
                        Some(DashboardAction::Quit) => return Ok(()),
                        Some(DashboardAction::Refresh) => app.request_refresh(),
                        None => {}
                    },
                }
            }
        }

        // Let the poller task run between frames
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, state: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, state),
    }
}
