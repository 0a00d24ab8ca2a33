use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};

use crate::{
    error::LookupError,
    model::{
        AirQualityObservation, AqiCategory, Coordinates, Location, WeatherCondition,
        WeatherObservation,
    },
};

use super::WeatherProvider;

pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENWEATHER_BASE_URL)
    }

    /// Point the provider somewhere other than the public API (tests, proxies).
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        city: Option<&str>,
    ) -> Result<T, LookupError> {
        let url = format!("{}/data/2.5/{endpoint}", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, endpoint, "OpenWeather responded");

        match (status, city) {
            (s, _) if s.is_success() => {}
            (StatusCode::UNAUTHORIZED, _) => return Err(LookupError::InvalidApiKey),
            (StatusCode::NOT_FOUND, Some(city)) => {
                return Err(LookupError::CityNotFound(city.to_string()));
            }
            _ => {
                warn!(%status, endpoint, "OpenWeather request failed");
                return Err(LookupError::Upstream {
                    status,
                    body: truncate_body(&body),
                });
            }
        }

        serde_json::from_str(&body)
            .map_err(|err| LookupError::MalformedPayload(format!("{endpoint}: {err}")))
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    coord: OwCoord,
    main: OwMain,
    weather: Vec<OwWeather>,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwAqi {
    aqi: i64,
}

#[derive(Debug, Deserialize)]
struct OwAirEntry {
    dt: i64,
    main: OwAqi,
}

#[derive(Debug, Deserialize)]
struct OwAirResponse {
    list: Vec<OwAirEntry>,
}

impl OwCurrentResponse {
    fn into_observation(self) -> Result<WeatherObservation, LookupError> {
        let condition = self
            .weather
            .first()
            .map(|w| WeatherCondition::from(w.main.as_str()))
            .ok_or_else(|| malformed("weather list is empty"))?;

        if self.name.trim().is_empty() {
            return Err(malformed("place name is empty"));
        }

        let country = self
            .sys
            .country
            .as_deref()
            .map(str::trim)
            .filter(|c| c.len() == 2 && c.chars().all(|ch| ch.is_ascii_alphabetic()))
            .map(str::to_ascii_uppercase)
            .ok_or_else(|| malformed("missing or invalid country code"))?;

        let coordinates = Coordinates::new(self.coord.lat, self.coord.lon)
            .map_err(|err| malformed(&err.to_string()))?;

        if !self.main.temp.is_finite() {
            return Err(malformed("temperature is not a number"));
        }

        Ok(WeatherObservation {
            condition,
            temperature_c: self.main.temp,
            place: self.name,
            country,
            coordinates,
            observed_at: unix_to_utc(self.dt)?,
        })
    }
}

impl OwAirResponse {
    fn into_observation(self) -> Result<AirQualityObservation, LookupError> {
        let entry = self
            .list
            .first()
            .ok_or_else(|| malformed("air quality list is empty"))?;

        let category = u8::try_from(entry.main.aqi)
            .ok()
            .and_then(|raw| AqiCategory::try_from(raw).ok())
            .ok_or_else(|| {
                malformed(&format!("air quality index {} is outside 1..=5", entry.main.aqi))
            })?;

        Ok(AirQualityObservation {
            category,
            observed_at: unix_to_utc(entry.dt)?,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip_all, fields(%location))]
    async fn current_weather(
        &self,
        location: &Location,
    ) -> Result<WeatherObservation, LookupError> {
        let mut query = match location {
            Location::City(name) => vec![("q", name.clone())],
            Location::Coordinates(coords) => vec![
                ("lat", coords.lat().to_string()),
                ("lon", coords.lon().to_string()),
            ],
        };
        query.push(("units", "metric".to_string()));

        let city = match location {
            Location::City(name) => Some(name.as_str()),
            Location::Coordinates(_) => None,
        };
        let parsed: OwCurrentResponse = self.fetch("weather", &query, city).await?;
        parsed.into_observation()
    }

    #[instrument(skip_all, fields(%coordinates))]
    async fn air_quality(
        &self,
        coordinates: Coordinates,
    ) -> Result<AirQualityObservation, LookupError> {
        let query = [
            ("lat", coordinates.lat().to_string()),
            ("lon", coordinates.lon().to_string()),
        ];

        let parsed: OwAirResponse = self.fetch("air_pollution", &query, None).await?;
        parsed.into_observation()
    }
}

fn malformed(reason: &str) -> LookupError {
    LookupError::MalformedPayload(reason.to_string())
}

fn unix_to_utc(ts: i64) -> Result<DateTime<Utc>, LookupError> {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .ok_or_else(|| malformed(&format!("timestamp {ts} is out of range")))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
