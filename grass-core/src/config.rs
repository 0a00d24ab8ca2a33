use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{cities::default_cities, model::WeatherCondition, verdict::ClassifierRules};

/// Takes precedence over the key stored in the config file.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// adverse_conditions = ["Rain", "Snow", "Dust"]
/// cities = ["Lisbon", "Porto"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// OpenWeather API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Replaces the built-in adverse weather set when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adverse_conditions: Option<Vec<String>>,

    /// Replaces the built-in list used by `random` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<String>>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "touch-grass", "touch-grass")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key.trim().to_string());
    }

    /// API key from `OPENWEATHER_API_KEY`, falling back to the config file.
    pub fn resolve_api_key(&self) -> Result<String> {
        pick_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }

    /// Classifier rules with any configured adverse set applied.
    pub fn classifier_rules(&self) -> ClassifierRules {
        let rules = ClassifierRules::default();
        match &self.adverse_conditions {
            Some(labels) => rules
                .with_adverse_conditions(labels.iter().map(|l| WeatherCondition::from(l.as_str()))),
            None => rules,
        }
    }

    pub fn cities(&self) -> Vec<String> {
        match &self.cities {
            Some(cities) if !cities.is_empty() => cities.clone(),
            _ => default_cities(),
        }
    }
}

fn pick_api_key(from_env: Option<String>, from_file: Option<&str>) -> Result<String> {
    from_env
        .as_deref()
        .into_iter()
        .chain(from_file)
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: run `touch-grass configure` or set {API_KEY_ENV}."
            )
        })
}
