use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::model::{CurrentWeather, ForecastEntry, Temperature, Unit, WeatherCondition};

use super::{ProviderError, WeatherProvider};

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { api_key, http }
    }

    async fn fetch(&self, url: &str, city: &str, what: &str) -> Result<String, ProviderError> {
        debug!(city, what, "requesting OpenWeather");

        let res = self
            .http
            .get(url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("OpenWeather {what} request failed: {e}")))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            ProviderError::Network(format!("Failed to read OpenWeather {what} response body: {e}"))
        })?;

        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound(city.to_string()));
        }

        if !status.is_success() {
            return Err(ProviderError::InvalidResponse(format!(
                "OpenWeather {what} request failed with status {status}: {}",
                truncate_body(&body),
            )));
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        let body = self.fetch(CURRENT_URL, city, "current weather").await?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse OpenWeather current JSON: {e}"))
        })?;

        Ok(map_current(parsed))
    }

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, ProviderError> {
        let body = self.fetch(FORECAST_URL, city, "5-day forecast").await?;

        let parsed: OwForecastResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse OpenWeather forecast JSON: {e}"))
        })?;

        map_forecast(parsed)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u32,
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    #[serde(default)]
    sys: OwSys,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    #[serde(default)]
    list: Vec<OwForecastEntry>,
}

fn map_condition(w: OwWeather) -> WeatherCondition {
    WeatherCondition { code: w.id, main: w.main, description: w.description }
}

fn map_current(parsed: OwCurrentResponse) -> CurrentWeather {
    let condition = parsed.weather.into_iter().next().map(map_condition);

    CurrentWeather {
        city_name: parsed.name,
        country_code: parsed.sys.country,
        temperature: Temperature::from_provider(parsed.main.temp, Unit::Celsius),
        feels_like: Temperature::from_provider(parsed.main.feels_like, Unit::Celsius),
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        condition,
    }
}

fn map_forecast(parsed: OwForecastResponse) -> Result<Vec<ForecastEntry>, ProviderError> {
    parsed
        .list
        .into_iter()
        .map(|entry| {
            let timestamp = unix_to_utc(entry.dt).ok_or_else(|| {
                ProviderError::InvalidResponse(format!(
                    "Forecast entry carried an out-of-range timestamp: {}",
                    entry.dt
                ))
            })?;

            let condition = entry
                .weather
                .into_iter()
                .next()
                .map(map_condition)
                .unwrap_or_else(|| WeatherCondition {
                    code: 0,
                    main: String::new(),
                    description: String::new(),
                });

            Ok(ForecastEntry {
                timestamp,
                temperature: Temperature::from_provider(entry.main.temp, Unit::Celsius),
                condition,
            })
        })
        .collect()
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
