use std::{convert::Infallible, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Weather group as reported by the provider (`weather[0].main`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Drizzle,
    Mist,
    Smoke,
    Haze,
    Fog,
    /// Anything the classifier has no opinion about, e.g. "Dust" or "Squall".
    /// Built through `From<&str>` the label is capitalized, so "dust" and
    /// "DUST" compare equal.
    Other(String),
}

impl WeatherCondition {
    pub fn label(&self) -> &str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Drizzle => "Drizzle",
            Self::Mist => "Mist",
            Self::Smoke => "Smoke",
            Self::Haze => "Haze",
            Self::Fog => "Fog",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for WeatherCondition {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Clouds,
            "rain" => Self::Rain,
            "snow" => Self::Snow,
            "thunderstorm" => Self::Thunderstorm,
            "drizzle" => Self::Drizzle,
            "mist" => Self::Mist,
            "smoke" => Self::Smoke,
            "haze" => Self::Haze,
            "fog" => Self::Fog,
            _ => Self::Other(capitalize(trimmed)),
        }
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl FromStr for WeatherCondition {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// OpenWeather air-quality index bucket, 1 (Good) to 5 (Very Poor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    Good = 1,
    Fair = 2,
    Moderate = 3,
    Poor = 4,
    VeryPoor = 5,
}

impl AqiCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AqiCategory {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Good),
            2 => Ok(Self::Fair),
            3 => Ok(Self::Moderate),
            4 => Ok(Self::Poor),
            5 => Ok(Self::VeryPoor),
            other => Err(ValidationError::AqiOutOfRange(other.into())),
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct RawCoordinates {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = ValidationError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lon)
    }
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::Latitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ValidationError::Longitude(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// What the user asked about.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    City(String),
    Coordinates(Coordinates),
}

impl Location {
    pub fn city(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyCity);
        }
        Ok(Self::City(name.to_string()))
    }

    pub fn coordinates(lat: f64, lon: f64) -> Result<Self, ValidationError> {
        Coordinates::new(lat, lon).map(Self::Coordinates)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City(name) => f.write_str(name),
            Self::Coordinates(coords) => write!(f, "({coords})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub condition: WeatherCondition,
    pub temperature_c: f64,
    pub place: String,
    /// ISO 3166 alpha-2, upper case.
    pub country: String,
    pub coordinates: Coordinates,
    pub observed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityObservation {
    pub category: AqiCategory,
    pub observed_at: DateTime<Utc>,
}
