mod api;
mod chart;
pub mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod export;
mod logging;
mod pagination;
mod reading;
mod runtime;
mod session;
mod ui;
mod vitals;
mod workers;

use crate::api::{SensorApi, SensorApiClient};
use crate::config::{Config, get_config_path};
use crate::environment::{ENVIRONMENT_VAR, Environment, resolve_environment};
use crate::reading::DisplayZone;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::ui::UIConfig;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Base URL of the sensor API, e.g. http://localhost:3000
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Seconds between automatic refreshes
        #[arg(long, value_name = "SECS")]
        refresh_interval: Option<u64>,

        /// Rows per table page (5, 10 or 20)
        #[arg(long, value_name = "N")]
        items_per_page: Option<usize>,

        /// Run without the terminal UI, printing events to stdout
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Fill the dashboard background
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Fetch once and write the readings to a CSV file
    Export {
        /// Base URL of the sensor API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Output file. Defaults to health-data.csv in the configured export directory.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Save settings to the configuration file
    Configure {
        /// Base URL of the sensor API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Seconds between automatic refreshes
        #[arg(long, value_name = "SECS")]
        refresh_interval: Option<u64>,

        /// Rows per table page (5, 10 or 20)
        #[arg(long, value_name = "N")]
        items_per_page: Option<usize>,

        /// Directory CSV exports are written to
        #[arg(long, value_name = "DIR")]
        export_dir: Option<PathBuf>,

        /// Display offset from UTC in minutes (330 is IST)
        #[arg(long, value_name = "MINUTES", allow_hyphen_values = true)]
        utc_offset_minutes: Option<i32>,
    },
    /// Delete the configuration file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            api_url,
            refresh_interval,
            items_per_page,
            headless,
            with_background,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let environment = environment_for(api_url.as_deref(), &config)?;
            let ui_config = UIConfig {
                with_background_color: with_background,
                refresh_interval_secs: refresh_interval.unwrap_or(config.refresh_interval_secs),
                items_per_page: items_per_page.unwrap_or(config.items_per_page),
                export_dir: config.export_dir(),
                zone: display_zone(&config)?,
            };
            validate_start_options(&ui_config)?;
            start(environment, ui_config, headless).await
        }
        Command::Export { api_url, output } => {
            let config = Config::load_or_default(&config_path)?;
            let environment = environment_for(api_url.as_deref(), &config)?;
            let zone = display_zone(&config)?;
            let output = output.unwrap_or_else(|| {
                config
                    .export_dir()
                    .join(consts::cli_consts::export::CSV_FILE_NAME)
            });
            export_once(environment, zone, output).await
        }
        Command::Configure {
            api_url,
            refresh_interval,
            items_per_page,
            export_dir,
            utc_offset_minutes,
        } => {
            let mut config = Config::load_or_default(&config_path)?;
            if let Some(url) = api_url {
                url.parse::<Environment>()
                    .map_err(|_| format!("Invalid --api-url: {}", url))?;
                config.api_url = Some(url);
            }
            if let Some(secs) = refresh_interval {
                config.refresh_interval_secs = secs;
            }
            if let Some(n) = items_per_page {
                config.items_per_page = n;
            }
            if let Some(dir) = export_dir {
                config.export_dir = Some(dir);
            }
            if let Some(minutes) = utc_offset_minutes {
                config.utc_offset_minutes = minutes;
            }
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Configuration saved", "{}", config_path.display());
            Ok(())
        }
        Command::Reset => {
            if !config_path.exists() {
                print_cmd_warn!("Nothing to reset", "{} does not exist", config_path.display());
                return Ok(());
            }
            print_cmd_info!("Resetting configuration", "{}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Resolve the deployment from the flag, the config file and the environment.
fn environment_for(flag: Option<&str>, config: &Config) -> Result<Environment, Box<dyn Error>> {
    let env_var = std::env::var(ENVIRONMENT_VAR).ok();
    resolve_environment(flag, config.api_url.as_deref(), env_var.as_deref()).map_err(Into::into)
}

fn display_zone(config: &Config) -> Result<DisplayZone, Box<dyn Error>> {
    DisplayZone::from_offset_minutes(config.utc_offset_minutes).ok_or_else(|| {
        format!(
            "Invalid utc_offset_minutes: {}",
            config.utc_offset_minutes
        )
        .into()
    })
}

/// Flags override the config file, so check them the same way the file is checked.
fn validate_start_options(ui_config: &UIConfig) -> Result<(), Box<dyn Error>> {
    use crate::consts::cli_consts::{polling, view};
    if !view::PAGE_SIZES.contains(&ui_config.items_per_page) {
        return Err(format!(
            "--items-per-page must be one of {:?}, got {}",
            view::PAGE_SIZES,
            ui_config.items_per_page
        )
        .into());
    }
    if ui_config.refresh_interval_secs == 0
        || ui_config.refresh_interval_secs > polling::MAX_REFRESH_INTERVAL_SECS
    {
        return Err(format!(
            "--refresh-interval must be between 1 and {}, got {}",
            polling::MAX_REFRESH_INTERVAL_SECS,
            ui_config.refresh_interval_secs
        )
        .into());
    }
    Ok(())
}

/// Starts the dashboard session.
///
/// # Arguments
/// * `env` - The deployment to poll.
/// * `ui_config` - Display and polling settings.
/// * `headless` - Print events instead of drawing the terminal UI.
async fn start(env: Environment, ui_config: UIConfig, headless: bool) -> Result<(), Box<dyn Error>> {
    let session = setup_session(env, ui_config)?;
    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session).await
    }
}

/// Fetch one batch and write it to `output`.
async fn export_once(
    env: Environment,
    zone: DisplayZone,
    output: PathBuf,
) -> Result<(), Box<dyn Error>> {
    logging::init_console_logger();
    let client = SensorApiClient::new(env)?;
    let batch = match client.get_readings().await {
        Ok(batch) => batch,
        Err(e) => {
            print_cmd_error!("Failed to fetch readings", "{}", e);
            return Err(Box::new(e));
        }
    };
    if let Some(first) = batch.skipped.first() {
        print_cmd_warn!(
            "Skipped malformed readings",
            "{} left out of the export, first: {}",
            batch.skipped.len(),
            first
        );
    }
    let readings = batch.readings;
    let path = export::write_csv(&readings, &zone, &output)?;
    print_cmd_success!(
        "Export complete",
        "{} readings from {} written to {}",
        readings.len(),
        client.environment().data_url(),
        path.display()
    );
    Ok(())
}
