use serde::{Deserialize, Serialize};

use crate::display::DisplayState;
use crate::history::SearchHistory;
use crate::model::{CurrentWeather, ForecastEntry, Unit};
use crate::mood::Mood;

/// One ingested provider observation: current conditions plus the raw
/// forecast series, already Kelvin-corrected and tagged with units.
/// Kept so a unit toggle can rebuild the display without re-fetching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastEntry>,
}

/// Process-lifetime presentation state.
///
/// Mutated only by the query controller and the unit toggle. A failed
/// query leaves every field untouched, so the previously displayed
/// state remains valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub unit: Unit,
    pub mood: Mood,
    pub history: SearchHistory,
    pub last_display: Option<DisplayState>,
    pub last_observation: Option<Observation>,
}

impl SessionState {
    pub fn with_unit(unit: Unit) -> Self {
        Self { unit, ..Self::default() }
    }
}
