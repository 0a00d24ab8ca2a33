use crate::{
    Config,
    error::LookupError,
    model::{AirQualityObservation, Coordinates, Location, WeatherObservation},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of the two observations a verdict is built from.
///
/// Implementations validate upstream payloads: anything they return is
/// safe to hand to the classifier as is.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, location: &Location)
    -> Result<WeatherObservation, LookupError>;

    async fn air_quality(&self, coordinates: Coordinates)
    -> Result<AirQualityObservation, LookupError>;
}

/// Construct the OpenWeather provider from config (or `OPENWEATHER_API_KEY`).
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.resolve_api_key()?;
    Ok(OpenWeatherProvider::new(api_key))
}
