use serde::{Deserialize, Serialize};

use crate::forecast::{self, MAX_FORECAST_DAYS};
use crate::model::{CurrentWeather, ForecastEntry, Unit};
use crate::mood::Mood;

/// Immutable, fully unit-converted snapshot ready for rendering.
///
/// Produced fresh on every successful query, unit toggle, and mood
/// change; the presentation layer replaces it rather than mutating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub current: CurrentWeather,
    pub forecast_days: Vec<ForecastEntry>,
    pub mood: Mood,
    pub unit: Unit,
}

/// Assemble a display snapshot from already-ingested observation data.
///
/// Converts the current temperatures and every selected forecast entry
/// to `unit`. Inputs are expected to be normalized at ingestion; this is
/// a plain scale conversion, the Kelvin correction is never re-applied
/// here (so repeated unit toggles stay lossless).
pub fn build(
    current: &CurrentWeather,
    forecast: &[ForecastEntry],
    unit: Unit,
    mood: Mood,
) -> DisplayState {
    let mut current = current.clone();
    current.temperature = current.temperature.convert_to(unit);
    current.feels_like = current.feels_like.convert_to(unit);

    let forecast_days = forecast::select_daily(forecast, MAX_FORECAST_DAYS)
        .into_iter()
        .map(|mut entry| {
            entry.temperature = entry.temperature.convert_to(unit);
            entry
        })
        .collect();

    DisplayState { current, forecast_days, mood, unit }
}
