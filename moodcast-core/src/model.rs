use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Temperature scale selected for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn toggle(self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Celsius => "metric",
            Unit::Fahrenheit => "imperial",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Unit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "metric" | "celsius" | "c" => Ok(Unit::Celsius),
            "imperial" | "fahrenheit" | "f" => Ok(Unit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: metric (celsius), imperial (fahrenheit)."
            )),
        }
    }
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

const KELVIN_TO_CELSIUS: f64 = 273.15;

/// No plausible Celsius reading exceeds this; above it the source value
/// was a Kelvin figure from a provider queried without a units parameter.
const KELVIN_SUSPECT_THRESHOLD: f64 = 200.0;

/// A scalar temperature tagged with its scale. Values are never held
/// unit-less once ingested from a provider payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: f64,
    pub unit: Unit,
}

impl Temperature {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Tag a raw provider value, correcting Kelvin-scale input that was
    /// declared as Celsius. Fahrenheit input is taken as-is.
    pub fn from_provider(value: f64, declared: Unit) -> Self {
        match declared {
            Unit::Celsius if value > KELVIN_SUSPECT_THRESHOLD => {
                Self::new(value - KELVIN_TO_CELSIUS, Unit::Celsius)
            }
            _ => Self::new(value, declared),
        }
    }

    /// Convert to `unit`. Converting to the current unit is a no-op.
    pub fn convert_to(self, unit: Unit) -> Self {
        match (self.unit, unit) {
            (Unit::Celsius, Unit::Fahrenheit) => {
                Self::new(celsius_to_fahrenheit(self.value), unit)
            }
            (Unit::Fahrenheit, Unit::Celsius) => {
                Self::new(fahrenheit_to_celsius(self.value), unit)
            }
            _ => self,
        }
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}{}", self.value, self.unit.symbol())
    }
}

/// Raw condition classification from the provider. Used only as
/// classifier and display input, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub code: u32,
    pub main: String,
    pub description: String,
}

/// Current conditions for one location, as ingested from the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city_name: String,
    pub country_code: String,
    pub temperature: Temperature,
    pub feels_like: Temperature,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Absent when the payload carried an empty condition list.
    pub condition: Option<WeatherCondition>,
}

/// One sample of the 5-day/3-hour forecast series, ordered by timestamp
/// ascending as delivered by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: DateTime<Utc>,
    pub temperature: Temperature,
    pub condition: WeatherCondition,
}
