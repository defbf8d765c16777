use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::Config;
use crate::model::{CurrentWeather, ForecastEntry};
use crate::provider::openweather::OpenWeatherProvider;

pub mod openweather;

/// Failure kinds surfaced by a weather provider.
///
/// None of these are retried here; retry policy, if any, belongs to the
/// provider implementation itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("City not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response from weather provider: {0}")]
    InvalidResponse(String),
}

/// Source of current conditions and 5-day/3-hour forecast data.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, ProviderError>;

    /// Forecast samples ordered by timestamp ascending.
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, ProviderError>;
}

/// Construct the configured provider.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `moodcast configure` and enter your OpenWeather API key."
        )
    })?;

    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned(), config.request_timeout())))
}
