//! Yes/No decision for a single lookup.
//!
//! Rules run in a fixed order and each one that fails overwrites the
//! message, so the reason shown is the one from the last failing rule.
//! Temperature is evaluated last and therefore wins.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{AirQualityObservation, AqiCategory, WeatherCondition, WeatherObservation};

pub const GREAT_CONDITIONS: &str = "Conditions are great, go touch some grass!";
pub const FREEZING: &str = "It's freezing, stay warm.";
pub const TOO_HOT: &str = "It's too hot, stay cool.";

/// Weather groups that make a verdict unfavorable out of the box.
pub const DEFAULT_ADVERSE_CONDITIONS: [WeatherCondition; 8] = [
    WeatherCondition::Rain,
    WeatherCondition::Snow,
    WeatherCondition::Thunderstorm,
    WeatherCondition::Drizzle,
    WeatherCondition::Mist,
    WeatherCondition::Smoke,
    WeatherCondition::Haze,
    WeatherCondition::Fog,
];

/// Thresholds and the adverse-condition set used by [`classify`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierRules {
    pub adverse_conditions: HashSet<WeatherCondition>,
    /// Worst category that still counts as fine.
    pub worst_acceptable_aqi: AqiCategory,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            adverse_conditions: DEFAULT_ADVERSE_CONDITIONS.into_iter().collect(),
            worst_acceptable_aqi: AqiCategory::Fair,
            min_temperature_c: 0.0,
            max_temperature_c: 35.0,
        }
    }
}

impl ClassifierRules {
    pub fn with_adverse_conditions<I>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = WeatherCondition>,
    {
        self.adverse_conditions = conditions.into_iter().collect();
        self
    }

    /// Run the rule table over the three signals.
    pub fn judge(
        &self,
        condition: &WeatherCondition,
        temperature_c: f64,
        aqi: AqiCategory,
    ) -> Judgement {
        let mut judgement = Judgement {
            favorable: true,
            message: GREAT_CONDITIONS.to_string(),
        };

        if self.adverse_conditions.contains(condition) {
            judgement.reject(format!(
                "It's currently {}, not ideal.",
                condition.label().to_lowercase()
            ));
        }

        if aqi > self.worst_acceptable_aqi {
            judgement.reject(format!(
                "Air quality is {}, stay inside.",
                aqi.label().to_lowercase()
            ));
        }

        if temperature_c < self.min_temperature_c {
            judgement.reject(FREEZING.to_string());
        } else if temperature_c > self.max_temperature_c {
            judgement.reject(TOO_HOT.to_string());
        }

        judgement
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgement {
    pub favorable: bool,
    pub message: String,
}

impl Judgement {
    fn reject(&mut self, message: String) {
        self.favorable = false;
        self.message = message;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub favorable: bool,
    pub message: String,
    pub place: String,
    pub country: String,
    pub weather: String,
    pub air_quality: String,
    pub temperature: String,
}

impl Verdict {
    pub fn answer(&self) -> &'static str {
        if self.favorable { "Yes" } else { "No" }
    }
}

pub fn classify(
    rules: &ClassifierRules,
    weather: &WeatherObservation,
    air: &AirQualityObservation,
) -> Verdict {
    let Judgement { favorable, message } =
        rules.judge(&weather.condition, weather.temperature_c, air.category);

    Verdict {
        favorable,
        message,
        place: weather.place.clone(),
        country: weather.country.clone(),
        weather: weather.condition.label().to_string(),
        air_quality: air.category.label().to_string(),
        temperature: format_temperature(weather.temperature_c),
    }
}

/// Whole degrees, never "-0°C".
pub fn format_temperature(celsius: f64) -> String {
    let rounded = celsius.round();
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}°C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinates;
    use chrono::Utc;

    fn judge(condition: WeatherCondition, temperature_c: f64, aqi: AqiCategory) -> Judgement {
        ClassifierRules::default().judge(&condition, temperature_c, aqi)
    }

    #[test]
    fn clear_mild_clean_air_is_favorable() {
        let j = judge(WeatherCondition::Clear, 20.0, AqiCategory::Good);
        assert!(j.favorable);
        assert_eq!(j.message, GREAT_CONDITIONS);
    }

    #[test]
    fn every_adverse_condition_is_named() {
        for condition in DEFAULT_ADVERSE_CONDITIONS {
            let j = judge(condition.clone(), 20.0, AqiCategory::Fair);
            assert!(!j.favorable, "{condition} should be unfavorable");
            assert_eq!(
                j.message,
                format!("It's currently {}, not ideal.", condition.label().to_lowercase())
            );
        }
    }

    #[test]
    fn poor_air_quality_is_unfavorable() {
        for aqi in [AqiCategory::Moderate, AqiCategory::Poor, AqiCategory::VeryPoor] {
            let j = judge(WeatherCondition::Clear, 20.0, aqi);
            assert!(!j.favorable);
            assert_eq!(
                j.message,
                format!("Air quality is {}, stay inside.", aqi.label().to_lowercase())
            );
        }
    }

    #[test]
    fn fair_air_quality_is_fine() {
        assert!(judge(WeatherCondition::Clear, 20.0, AqiCategory::Fair).favorable);
    }

    #[test]
    fn freezing_wins_over_everything() {
        for condition in [WeatherCondition::Clear, WeatherCondition::Snow] {
            for aqi in [AqiCategory::Good, AqiCategory::VeryPoor] {
                let j = judge(condition.clone(), -0.5, aqi);
                assert!(!j.favorable);
                assert_eq!(j.message, FREEZING);
            }
        }
    }

    #[test]
    fn heat_wins_over_everything() {
        let j = judge(WeatherCondition::Haze, 40.0, AqiCategory::Poor);
        assert!(!j.favorable);
        assert_eq!(j.message, TOO_HOT);

        let j = judge(WeatherCondition::Clear, 35.1, AqiCategory::Good);
        assert_eq!(j.message, TOO_HOT);
    }

    #[test]
    fn temperature_bounds_are_inclusive() {
        assert!(judge(WeatherCondition::Clear, 0.0, AqiCategory::Good).favorable);
        assert!(judge(WeatherCondition::Clear, 35.0, AqiCategory::Good).favorable);
    }

    #[test]
    fn rain_bad_air_and_frost_reports_frost() {
        let j = judge(WeatherCondition::Rain, -5.0, AqiCategory::Poor);
        assert!(!j.favorable);
        assert_eq!(j.message, FREEZING);
    }

    #[test]
    fn air_quality_overrides_weather_message() {
        let j = judge(WeatherCondition::Rain, 10.0, AqiCategory::VeryPoor);
        assert_eq!(j.message, "Air quality is very poor, stay inside.");
    }

    #[test]
    fn unknown_and_cloudy_conditions_are_neutral() {
        assert!(judge(WeatherCondition::Other("Dust".into()), 20.0, AqiCategory::Good).favorable);
        assert!(judge(WeatherCondition::Clouds, 20.0, AqiCategory::Good).favorable);
    }

    #[test]
    fn adverse_set_can_be_replaced() {
        let rules = ClassifierRules::default()
            .with_adverse_conditions([WeatherCondition::Other("Dust".into())]);

        assert!(rules.judge(&WeatherCondition::Rain, 20.0, AqiCategory::Good).favorable);
        let j = rules.judge(&WeatherCondition::Other("Dust".into()), 20.0, AqiCategory::Good);
        assert_eq!(j.message, "It's currently dust, not ideal.");
    }

    #[test]
    fn classify_echoes_observation_fields() {
        let now = Utc::now();
        let weather = WeatherObservation {
            condition: WeatherCondition::Drizzle,
            temperature_c: 12.6,
            place: "Dublin".into(),
            country: "IE".into(),
            coordinates: Coordinates::new(53.35, -6.26).unwrap(),
            observed_at: now,
        };
        let air = AirQualityObservation {
            category: AqiCategory::Good,
            observed_at: now,
        };

        let verdict = classify(&ClassifierRules::default(), &weather, &air);

        assert!(!verdict.favorable);
        assert_eq!(verdict.answer(), "No");
        assert_eq!(verdict.message, "It's currently drizzle, not ideal.");
        assert_eq!(verdict.place, "Dublin");
        assert_eq!(verdict.country, "IE");
        assert_eq!(verdict.weather, "Drizzle");
        assert_eq!(verdict.air_quality, "Good");
        assert_eq!(verdict.temperature, "13°C");
    }

    #[test]
    fn temperature_formatting() {
        assert_eq!(format_temperature(21.4), "21°C");
        assert_eq!(format_temperature(-0.3), "0°C");
        assert_eq!(format_temperature(-7.5), "-8°C");
    }
}
