use thiserror::Error;
use tracing::{debug, info, warn};

use crate::display::{self, DisplayState};
use crate::mood::Mood;
use crate::provider::{ProviderError, WeatherProvider};
use crate::session::{Observation, SessionState};

/// Why a query produced no display update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Rejected before any provider call was made.
    #[error("Please enter a city name")]
    EmptyCity,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Outcome of a successful query, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUpdate {
    pub display: DisplayState,
    /// True when this query moved the session to a different mood; the
    /// presentation layer may surface a notification and reseed its
    /// theme.
    pub mood_changed: bool,
}

/// Orchestrates provider calls and session-state transitions.
///
/// The controller is the single writer to `SessionState`: `search` and
/// `toggle_unit` take `&mut self`, so a second query cannot start while
/// one is in flight on the same session and stale data can never land
/// on top of fresh data.
#[derive(Debug)]
pub struct WeatherController {
    provider: Box<dyn WeatherProvider>,
    session: SessionState,
}

impl WeatherController {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self::with_session(provider, SessionState::default())
    }

    pub fn with_session(provider: Box<dyn WeatherProvider>, session: SessionState) -> Self {
        Self { provider, session }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Run one query: fetch current conditions then the forecast, derive
    /// the mood, and fold everything into a fresh display snapshot.
    ///
    /// Validation and provider failures return before any session
    /// mutation, so `last_display`, the active mood, and the search
    /// history keep their previous values on every error path.
    pub async fn search(&mut self, city: &str) -> Result<DisplayUpdate, QueryError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(QueryError::EmptyCity);
        }

        debug!(city, "querying weather provider");

        let current = self
            .provider
            .current_weather(city)
            .await
            .inspect_err(|e| warn!(city, error = %e, "current weather query failed"))?;

        let forecast = self
            .provider
            .forecast(city)
            .await
            .inspect_err(|e| warn!(city, error = %e, "forecast query failed"))?;

        let mood = Mood::classify(current.condition.as_ref());
        let mood_changed = mood != self.session.mood;
        if mood_changed {
            info!(from = %self.session.mood, to = %mood, "mood changed");
            self.session.mood = mood;
        }

        let display = display::build(&current, &forecast, self.session.unit, mood);

        self.session.last_observation = Some(Observation { current, forecast });
        self.session.last_display = Some(display.clone());
        self.session.history.add(city);

        Ok(DisplayUpdate { display, mood_changed })
    }

    /// Flip the active unit. With an observation on hand, rebuild the
    /// display from the already-normalized values and return the fresh
    /// snapshot. This is a plain scale conversion: no re-fetch, and the
    /// Kelvin correction is never applied a second time.
    pub fn toggle_unit(&mut self) -> Option<DisplayState> {
        self.session.unit = self.session.unit.toggle();
        debug!(unit = %self.session.unit, "active unit toggled");

        let observation = self.session.last_observation.as_ref()?;
        let display = display::build(
            &observation.current,
            &observation.forecast,
            self.session.unit,
            self.session.mood,
        );
        self.session.last_display = Some(display.clone());

        Some(display)
    }

    /// Drop all recent searches.
    pub fn clear_history(&mut self) {
        self.session.history.clear();
    }
}
