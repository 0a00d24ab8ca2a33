use tracing::{info, instrument};

use crate::{
    error::LookupError,
    model::{AirQualityObservation, Location, WeatherObservation},
    provider::WeatherProvider,
    verdict::{ClassifierRules, Verdict, classify},
};

/// Verdict plus the observations it was derived from.
#[derive(Debug, Clone)]
pub struct Report {
    pub verdict: Verdict,
    pub weather: WeatherObservation,
    pub air: AirQualityObservation,
}

/// Fetches both observations for a location and classifies them.
#[derive(Debug)]
pub struct GrassChecker<P> {
    provider: P,
    rules: ClassifierRules,
}

impl<P: WeatherProvider> GrassChecker<P> {
    pub fn new(provider: P, rules: ClassifierRules) -> Self {
        Self { provider, rules }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Air quality is looked up at the coordinates the weather lookup
    /// resolved to, so city queries need no separate geocoding step.
    #[instrument(skip_all, fields(%location))]
    pub async fn check(&self, location: &Location) -> Result<Report, LookupError> {
        let weather = self.provider.current_weather(location).await?;
        let air = self.provider.air_quality(weather.coordinates).await?;

        let verdict = classify(&self.rules, &weather, &air);
        info!(
            place = %verdict.place,
            favorable = verdict.favorable,
            reason = %verdict.message,
            "verdict ready"
        );

        Ok(Report { verdict, weather, air })
    }
}
