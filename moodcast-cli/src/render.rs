//! Text rendering of display snapshots.
//!
//! All numeric logic lives in the core; this module only formats the
//! already unit-converted state. Every per-mood mapping is an exhaustive
//! match, so adding a mood variant is a compile error until each
//! consumer handles it.

use moodcast_core::{DisplayState, Mood, Temperature, Unit};

pub fn display(state: &DisplayState) -> String {
    let current = &state.current;
    let mut out = String::new();

    let location = if current.country_code.is_empty() {
        current.city_name.clone()
    } else {
        format!("{}, {}", current.city_name, current.country_code)
    };

    let description = current
        .condition
        .as_ref()
        .map(|c| c.description.as_str())
        .unwrap_or("conditions unavailable");

    out.push_str(&format!("{location}  {} {description}\n", mood_glyph(state.mood)));
    out.push_str(&format!("  {} (feels like {})\n", current.temperature, current.feels_like));
    out.push_str(&format!(
        "  Humidity {}%   Wind {:.1} m/s\n",
        current.humidity_pct, current.wind_speed_mps
    ));

    if let Some(alert) = heat_alert(current.temperature) {
        out.push_str(&format!("  {alert}\n"));
    }

    if !state.forecast_days.is_empty() {
        out.push_str("\n5-day forecast:\n");
        for entry in &state.forecast_days {
            let temp = entry.temperature.to_string();
            out.push_str(&format!(
                "  {}  {temp:>7}  {}\n",
                entry.timestamp.format("%a"),
                entry.condition.description
            ));
        }
    }

    out
}

/// Notification line shown when a query lands in a different mood.
pub fn mood_notification(mood: Mood) -> String {
    let message = match mood {
        Mood::Sunny => "☀️ Bright and sunny mood!",
        Mood::Cloudy => "☁️ Cloudy and calm mood",
        Mood::Rainy => "🌧️ Rainy and cozy mood",
        Mood::Snowy => "❄️ Snowy and chilly mood",
        Mood::Stormy => "⛈️ Stormy and intense mood",
        Mood::Foggy => "🌫️ Foggy and mysterious mood",
        Mood::Default => "Weather mood updated!",
    };

    format!("Mood changed: {message}")
}

fn mood_glyph(mood: Mood) -> &'static str {
    match mood {
        Mood::Sunny => "☀️",
        Mood::Cloudy => "☁️",
        Mood::Rainy => "🌧️",
        Mood::Snowy => "❄️",
        Mood::Stormy => "⛈️",
        Mood::Foggy => "🌫️",
        Mood::Default => "🌡️",
    }
}

fn heat_alert(temperature: Temperature) -> Option<&'static str> {
    let hot = match temperature.unit {
        Unit::Celsius => temperature.value > 35.0,
        Unit::Fahrenheit => temperature.value > 95.0,
    };

    hot.then_some("⚠ High temperature alert!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use moodcast_core::{CurrentWeather, ForecastEntry, WeatherCondition};

    fn rain_condition() -> WeatherCondition {
        WeatherCondition {
            code: 500,
            main: "Rain".to_string(),
            description: "light rain".to_string(),
        }
    }

    fn state(temp: Temperature) -> DisplayState {
        let start = Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp");

        DisplayState {
            current: CurrentWeather {
                city_name: "London".to_string(),
                country_code: "GB".to_string(),
                temperature: temp,
                feels_like: temp,
                humidity_pct: 70,
                wind_speed_mps: 3.0,
                condition: Some(rain_condition()),
            },
            forecast_days: (0..5)
                .map(|i| ForecastEntry {
                    timestamp: start + Duration::days(i),
                    temperature: temp,
                    condition: rain_condition(),
                })
                .collect(),
            mood: Mood::Rainy,
            unit: temp.unit,
        }
    }

    #[test]
    fn renders_location_conditions_and_temperatures() {
        let rendered = display(&state(Temperature::new(21.0, Unit::Celsius)));

        assert!(rendered.contains("London, GB"));
        assert!(rendered.contains("light rain"));
        assert!(rendered.contains("21.0°C"));
        assert!(rendered.contains("Humidity 70%"));
        assert!(rendered.contains("5-day forecast:"));
        assert_eq!(rendered.matches("light rain").count(), 6, "current plus five days");
    }

    #[test]
    fn renders_fahrenheit_symbols_after_toggle() {
        let rendered = display(&state(Temperature::new(69.8, Unit::Fahrenheit)));
        assert!(rendered.contains("69.8°F"));
        assert!(!rendered.contains("°C"));
    }

    #[test]
    fn missing_condition_degrades_gracefully() {
        let mut s = state(Temperature::new(21.0, Unit::Celsius));
        s.current.condition = None;
        s.forecast_days.clear();

        let rendered = display(&s);
        assert!(rendered.contains("conditions unavailable"));
        assert!(!rendered.contains("5-day forecast:"));
    }

    #[test]
    fn heat_alert_fires_per_unit_threshold() {
        assert!(heat_alert(Temperature::new(36.0, Unit::Celsius)).is_some());
        assert!(heat_alert(Temperature::new(35.0, Unit::Celsius)).is_none());
        assert!(heat_alert(Temperature::new(96.0, Unit::Fahrenheit)).is_some());
        assert!(heat_alert(Temperature::new(95.0, Unit::Fahrenheit)).is_none());
    }

    #[test]
    fn every_mood_has_a_notification_and_glyph() {
        let moods = [
            Mood::Sunny,
            Mood::Cloudy,
            Mood::Rainy,
            Mood::Snowy,
            Mood::Stormy,
            Mood::Foggy,
            Mood::Default,
        ];

        for mood in moods {
            assert!(!mood_glyph(mood).is_empty());
            assert!(mood_notification(mood).starts_with("Mood changed:"));
        }
    }
}
