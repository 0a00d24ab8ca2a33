use chrono::{DateTime, Local, Utc};
use grass_core::{Commentary, Report, country_flag};
use rand::Rng;

/// Plain-text rendering of a lookup, ready for stdout.
pub fn report<R: Rng + ?Sized>(report: &Report, rng: &mut R) -> String {
    let verdict = &report.verdict;
    let flag = country_flag(&verdict.country).unwrap_or_default();

    format!(
        "Should I touch grass in {place}, {country} {flag}?\n\
         \n  {answer}\n  {message}\n\
         \n  Weather:      {weather}\
         \n  Temperature:  {temperature}\
         \n  Air quality:  {air}\
         \n  Observed:     {observed}\n\
         \n  {quip}\n",
        place = verdict.place,
        country = verdict.country,
        answer = verdict.answer().to_uppercase(),
        message = verdict.message,
        weather = verdict.weather,
        temperature = verdict.temperature,
        air = verdict.air_quality,
        observed = local_time(report.weather.observed_at),
        quip = Commentary::default().pick(verdict.favorable, rng),
    )
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
