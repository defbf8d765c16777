use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::InquireError;
use moodcast_core::{Config, QueryError, SessionState, Unit, WeatherController, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "moodcast", version, about = "Mood-themed weather in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and preferred unit.
    Configure,

    /// Show current weather and the 5-day forecast for a city.
    Show {
        /// City name, e.g. "London".
        city: String,

        /// Display temperatures in Fahrenheit.
        #[arg(long)]
        fahrenheit: bool,
    },

    /// Interactive session: repeated searches, unit toggle, history.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, fahrenheit } => show(&city, fahrenheit).await,
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());

    let unit = inquire::Select::new("Preferred unit:", vec!["metric", "imperial"])
        .prompt()
        .context("Failed to read unit preference")?;
    config.set_default_unit(Unit::try_from(unit)?);

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(city: &str, fahrenheit: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let unit = if fahrenheit { Unit::Fahrenheit } else { config.default_unit()? };
    let mut controller = WeatherController::with_session(provider, SessionState::with_unit(unit));

    let update = controller.search(city).await?;
    print!("{}", render::display(&update.display));

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let session = SessionState::with_unit(config.default_unit()?);
    let mut controller = WeatherController::with_session(provider, session);

    println!("moodcast interactive session");
    println!("Type a city name, or: :u toggle units, :h recent searches, :c clear history, :q quit");

    loop {
        let input = match inquire::Text::new("City:").prompt() {
            Ok(value) => value,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        };

        match input.trim() {
            ":q" | ":quit" => break,
            ":u" | ":unit" => match controller.toggle_unit() {
                Some(display) => print!("{}", render::display(&display)),
                None => {
                    println!("Unit set to {}; search for a city first.", controller.session().unit);
                }
            },
            ":h" | ":history" => {
                if controller.session().history.is_empty() {
                    println!("No recent searches.");
                } else {
                    for city in controller.session().history.list() {
                        println!("  {city}");
                    }
                }
            }
            ":c" | ":clear" => {
                controller.clear_history();
                println!("History cleared.");
            }
            city => match controller.search(city).await {
                Ok(update) => {
                    if update.mood_changed {
                        println!("{}", render::mood_notification(update.display.mood));
                    }
                    print!("{}", render::display(&update.display));
                }
                Err(err @ QueryError::EmptyCity) => println!("{err}"),
                Err(err) => println!("Error: {err}"),
            },
        }
    }

    Ok(())
}
