use rand::{Rng, seq::SliceRandom};

/// Used by `random` when the config does not list its own cities.
pub const DEFAULT_CITIES: &[&str] = &[
    "Tokyo",
    "Delhi",
    "Shanghai",
    "Sao Paulo",
    "Mexico City",
    "Cairo",
    "Mumbai",
    "Beijing",
    "Osaka",
    "New York",
    "Buenos Aires",
    "Istanbul",
    "Lagos",
    "Manila",
    "Rio de Janeiro",
    "Los Angeles",
    "Moscow",
    "Paris",
    "Bangkok",
    "London",
    "Seoul",
    "Lima",
    "Madrid",
    "Toronto",
    "Sydney",
    "Nairobi",
    "Berlin",
    "Rome",
    "Reykjavik",
    "Cape Town",
    "Singapore",
    "Dubai",
    "Vancouver",
    "Amsterdam",
    "Stockholm",
    "Helsinki",
    "Auckland",
    "Honolulu",
    "Anchorage",
    "Marrakesh",
];

pub fn default_cities() -> Vec<String> {
    DEFAULT_CITIES.iter().map(|c| c.to_string()).collect()
}

pub fn random_city<'a, S, R>(cities: &'a [S], rng: &mut R) -> Option<&'a str>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    cities.choose(rng).map(|city| city.as_ref())
}
