//! Core library for the `touch-grass` CLI.
//!
//! This crate defines:
//! - The verdict classifier (is it a good time to go outside?)
//! - Shared domain models (weather and air-quality observations)
//! - Abstraction over the weather provider, with an OpenWeather backend
//! - Configuration & credentials handling
//! - Presentation helpers: commentary lines, country flags, random cities
//!
//! It is used by `grass-cli`, but can also be reused by other binaries or services.

pub mod cities;
pub mod commentary;
pub mod config;
pub mod error;
pub mod flag;
pub mod model;
pub mod provider;
pub mod service;
pub mod verdict;

pub use commentary::Commentary;
pub use config::Config;
pub use error::{LookupError, ValidationError};
pub use flag::country_flag;
pub use model::{
    AirQualityObservation, AqiCategory, Coordinates, Location, WeatherCondition,
    WeatherObservation,
};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use service::{GrassChecker, Report};
pub use verdict::{ClassifierRules, Verdict, classify};
