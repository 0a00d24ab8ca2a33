use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use grass_core::{
    Config, GrassChecker, Location, LookupError, cities::random_city, provider_from_config,
};
use tracing::{debug, info};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "touch-grass",
    version,
    about = "Should you go outside? Checks the weather and air quality for a city."
)]
pub struct Cli {
    /// More log output on stderr (-v, -vv, -vvv). `RUST_LOG` overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Print the verdict as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store your OpenWeather API key.
    Configure,

    /// Check a city by name.
    Check {
        /// City name, e.g. "Paris" or "Rio de Janeiro".
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check a pair of coordinates.
    At {
        /// Latitude in degrees, -90 to 90.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees, -180 to 180.
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check a random city.
    Random {
        #[command(flatten)]
        output: OutputArgs,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Configure => configure(config),
            Command::Check { city, output } => {
                let location = Location::city(&city.join(" "))?;
                lookup(&config, &location, &output).await
            }
            Command::At { lat, lon, output } => {
                let location = Location::coordinates(lat, lon)?;
                lookup(&config, &location, &output).await
            }
            Command::Random { output } => {
                let cities = config.cities();
                let city = random_city(&cities, &mut rand::thread_rng())
                    .ok_or_else(|| anyhow!("No cities configured"))?;
                info!(city, "picked a random city");

                let location = Location::city(city)?;
                lookup(&config, &location, &output).await
            }
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_help_message("Get one at https://home.openweathermap.org/api_keys")
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        return Err(anyhow!("API key must not be empty"));
    }

    config.set_api_key(api_key);
    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

async fn lookup(config: &Config, location: &Location, output: &OutputArgs) -> anyhow::Result<()> {
    let provider = provider_from_config(config)?;
    let checker = GrassChecker::new(provider, config.classifier_rules());
    debug!(%location, "looking up");

    let report = checker
        .check(location)
        .await
        .map_err(|err: LookupError| {
            let friendly = err.user_message();
            anyhow::Error::new(err).context(friendly)
        })?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&report.verdict)?);
    } else {
        print!("{}", render::report(&report, &mut rand::thread_rng()));
    }

    Ok(())
}
