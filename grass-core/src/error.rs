use reqwest::StatusCode;
use thiserror::Error;

/// Rejected input, before or after it went over the wire.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("City name must not be empty")]
    EmptyCity,
    #[error("Latitude {0} is outside -90..=90")]
    Latitude(f64),
    #[error("Longitude {0} is outside -180..=180")]
    Longitude(f64),
    #[error("Air quality index {0} is outside 1..=5")]
    AqiOutOfRange(i64),
}

/// Everything that can go wrong while looking a location up.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("City '{0}' was not found")]
    CityNotFound(String),

    #[error("The weather provider rejected the API key")]
    InvalidApiKey,

    #[error("Weather provider request failed with status {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Weather provider returned an unexpected payload: {0}")]
    MalformedPayload(String),

    #[error("Failed to reach the weather provider: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid location: {0}")]
    InvalidLocation(#[from] ValidationError),
}

impl LookupError {
    /// Short, friendly text for people rather than logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::CityNotFound(city) => {
                format!("Couldn't find \"{city}\". Check the spelling and try again.")
            }
            Self::InvalidApiKey => {
                "Your OpenWeather API key was rejected. Run `touch-grass configure` to set a new one."
                    .to_string()
            }
            Self::Upstream { .. } | Self::Network(_) => {
                "The weather service is unavailable right now. Try again in a bit.".to_string()
            }
            Self::MalformedPayload(_) => {
                "The weather service sent something we couldn't understand.".to_string()
            }
            Self::InvalidLocation(err) => err.to_string(),
        }
    }
}
