//! Core library for the `moodcast` weather app.
//!
//! This crate defines:
//! - The presentation state engine: mood classification, unit handling,
//!   forecast-day selection, search history, and display snapshots
//! - Abstraction over the weather provider, plus the OpenWeather client
//! - Configuration & credentials handling
//!
//! It is used by `moodcast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod controller;
pub mod display;
pub mod forecast;
pub mod history;
pub mod model;
pub mod mood;
pub mod provider;
pub mod session;

pub use config::Config;
pub use controller::{DisplayUpdate, QueryError, WeatherController};
pub use display::DisplayState;
pub use history::{DuplicatePolicy, SearchHistory};
pub use model::{CurrentWeather, ForecastEntry, Temperature, Unit, WeatherCondition};
pub use mood::Mood;
pub use provider::{ProviderError, WeatherProvider, provider_from_config};
pub use session::{Observation, SessionState};
