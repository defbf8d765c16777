use serde::{Deserialize, Serialize};

use crate::model::WeatherCondition;

/// Coarse weather category driving thematic presentation.
///
/// Closed set: every consumer (palette, glyph, notification text) matches
/// exhaustively on it instead of going through a string-keyed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
    Foggy,
    /// Neutral theme before the first classification succeeds.
    #[default]
    Default,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Sunny => "sunny",
            Mood::Cloudy => "cloudy",
            Mood::Rainy => "rainy",
            Mood::Snowy => "snowy",
            Mood::Stormy => "stormy",
            Mood::Foggy => "foggy",
            Mood::Default => "default",
        }
    }

    /// Classify a raw condition into a mood.
    ///
    /// Total over its input: absent data maps to `Default`, and an
    /// unrecognized condition falls through to `Sunny`. Rules form an
    /// ordered decision list combining the provider's numeric code table
    /// with description-substring fallbacks; the first match wins.
    pub fn classify(condition: Option<&WeatherCondition>) -> Self {
        let Some(condition) = condition else {
            return Mood::Default;
        };

        let description = condition.description.to_lowercase();

        match condition.code {
            // clear and light clouds still read as sunny
            800..=802 => Mood::Sunny,
            803 | 804 => Mood::Cloudy,
            _ if description.contains("overcast") => Mood::Cloudy,
            // drizzle and rain groups
            300..=302 | 310..=314 | 321 | 500..=504 | 511 | 520..=522 | 531 => Mood::Rainy,
            600..=602 | 611..=613 | 615 | 616 | 620..=622 => Mood::Snowy,
            200..=202 | 210..=212 | 221 | 230..=232 => Mood::Stormy,
            // atmosphere group: mist, smoke, haze, dust, fog, sand, ash, squall, tornado
            701 | 711 | 721 | 731 | 741 | 751 | 761 | 762 | 771 | 781 => Mood::Foggy,
            _ if description.contains("thunder") => Mood::Stormy,
            _ if description.contains("drizzle") || description.contains("rain") => Mood::Rainy,
            _ if description.contains("snow") => Mood::Snowy,
            _ if description.contains("fog") || description.contains("mist") => Mood::Foggy,
            _ if description.contains("cloud") => Mood::Cloudy,
            _ => Mood::Sunny,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(code: u32, description: &str) -> WeatherCondition {
        WeatherCondition {
            code,
            main: String::new(),
            description: description.to_string(),
        }
    }

    #[test]
    fn absent_condition_is_default() {
        assert_eq!(Mood::classify(None), Mood::Default);
    }

    #[test]
    fn clear_sky_is_sunny() {
        assert_eq!(Mood::classify(Some(&condition(800, "clear sky"))), Mood::Sunny);
    }

    #[test]
    fn light_clouds_still_read_sunny() {
        assert_eq!(Mood::classify(Some(&condition(801, "few clouds"))), Mood::Sunny);
        assert_eq!(Mood::classify(Some(&condition(802, "scattered clouds"))), Mood::Sunny);
    }

    #[test]
    fn heavy_clouds_are_cloudy() {
        assert_eq!(Mood::classify(Some(&condition(803, "broken clouds"))), Mood::Cloudy);
        assert_eq!(Mood::classify(Some(&condition(804, "overcast clouds"))), Mood::Cloudy);
    }

    #[test]
    fn rain_codes_are_rainy() {
        for code in [300, 314, 321, 500, 504, 511, 520, 522, 531] {
            assert_eq!(Mood::classify(Some(&condition(code, ""))), Mood::Rainy, "code {code}");
        }
    }

    #[test]
    fn snow_codes_are_snowy() {
        for code in [600, 602, 611, 613, 615, 616, 620, 622] {
            assert_eq!(Mood::classify(Some(&condition(code, ""))), Mood::Snowy, "code {code}");
        }
    }

    #[test]
    fn thunderstorm_codes_are_stormy() {
        for code in [200, 202, 210, 212, 221, 230, 232] {
            assert_eq!(Mood::classify(Some(&condition(code, ""))), Mood::Stormy, "code {code}");
        }
    }

    #[test]
    fn atmosphere_codes_are_foggy() {
        for code in [701, 711, 721, 731, 741, 751, 761, 762, 771, 781] {
            assert_eq!(Mood::classify(Some(&condition(code, ""))), Mood::Foggy, "code {code}");
        }
    }

    #[test]
    fn overcast_description_wins_over_later_code_rules() {
        // The overcast rule sits before the rain code table, so a rainy
        // code with an overcast description classifies as cloudy.
        let c = condition(500, "overcast with light rain");
        assert_eq!(Mood::classify(Some(&c)), Mood::Cloudy);
    }

    #[test]
    fn description_fallbacks_apply_to_unknown_codes() {
        assert_eq!(Mood::classify(Some(&condition(999, "distant thunder"))), Mood::Stormy);
        assert_eq!(Mood::classify(Some(&condition(999, "patchy rain nearby"))), Mood::Rainy);
        assert_eq!(Mood::classify(Some(&condition(999, "light drizzle"))), Mood::Rainy);
        assert_eq!(Mood::classify(Some(&condition(999, "blowing snow"))), Mood::Snowy);
        assert_eq!(Mood::classify(Some(&condition(999, "freezing mist"))), Mood::Foggy);
        assert_eq!(Mood::classify(Some(&condition(999, "low clouds"))), Mood::Cloudy);
    }

    #[test]
    fn fallback_order_is_thunder_before_rain() {
        let c = condition(999, "thundery outbreaks with rain");
        assert_eq!(Mood::classify(Some(&c)), Mood::Stormy);
    }

    #[test]
    fn unrecognized_condition_defaults_to_sunny() {
        assert_eq!(Mood::classify(Some(&condition(999, "sand devils"))), Mood::Sunny);
        assert_eq!(Mood::classify(Some(&condition(0, ""))), Mood::Sunny);
    }

    #[test]
    fn description_matching_is_case_insensitive() {
        assert_eq!(Mood::classify(Some(&condition(999, "Heavy RAIN"))), Mood::Rainy);
    }
}
