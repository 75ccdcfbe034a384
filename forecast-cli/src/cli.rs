use anyhow::{Context, bail};
use clap::{ArgAction, Parser, Subcommand};
use forecast_core::{
    Config, ForecastError, WeatherApp,
    viewmodel::DetailUiState,
};
use inquire::{CustomType, Password, PasswordDisplayMode, Text};
use log::{LevelFilter, warn};

use crate::{render, session};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Search locations and show their weather forecast")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Store the WeatherAPI.com API key and connection settings.
    Configure,

    /// Search locations matching a name.
    Search {
        /// City, region or airport name (at least 3 characters).
        query: String,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show current weather and forecast for a location.
    Show {
        /// Location name or "lat,lon".
        location: String,

        /// Number of forecast days; overrides the configured value.
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=14))]
        days: Option<u8>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Search as you type, then open a result.
    Interactive,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(config_or_default(Config::load()))?,

            Command::Search { query, json } => {
                let app = WeatherApp::from_config(&Config::load()?)?;
                let locations = app.search_locations.execute(&query).await?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&locations)?);
                } else if locations.is_empty() {
                    println!("No locations found for \"{}\".", query.trim());
                } else {
                    render::locations(&locations);
                }
            }

            Command::Show { location, days, json } => {
                let mut config = Config::load()?;
                if let Some(days) = days {
                    config.forecast_days = days;
                }
                if location.trim().is_empty() {
                    bail!(ForecastError::EmptyLocation);
                }

                let app = WeatherApp::from_config(&config)?;
                let detail = app.detail_view_model();
                detail.load_weather_for_location(location.trim());

                match detail.wait_until_settled().await.ui_state {
                    DetailUiState::Success { forecast, average_temperature } => {
                        if json {
                            println!("{}", serde_json::to_string_pretty(&forecast)?);
                        } else {
                            render::forecast(&forecast, average_temperature);
                        }
                    }
                    DetailUiState::Error(message) => bail!(message),
                    DetailUiState::Loading => bail!("Forecast request did not complete"),
                }
            }

            Command::Interactive => {
                let app = WeatherApp::from_config(&Config::load()?)?;
                session::run(&app).await?;
            }
        }

        Ok(())
    }
}

/// Stored config, or defaults when the file cannot be loaded.
fn config_or_default(loaded: anyhow::Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        warn!("{err:#}");
        eprintln!("Existing configuration could not be loaded; starting from defaults.");
        Config::default()
    })
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get a free key at https://www.weatherapi.com/signup.aspx")
        .prompt()
        .context("Failed to read API key")?;

    let base_url = Text::new("API base URL:")
        .with_default(&config.base_url)
        .prompt()
        .context("Failed to read base URL")?;

    let forecast_days = CustomType::<u8>::new("Forecast days (1-14):")
        .with_default(config.forecast_days)
        .with_error_message("Please enter a number between 1 and 14")
        .prompt()
        .context("Failed to read forecast days")?;

    config.set_api_key(&api_key);
    config.base_url = base_url.trim().to_string();
    config.forecast_days = forecast_days;
    config.validate()?;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}
