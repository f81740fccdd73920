//! Daemon configuration.
//!
//! Loaded from a TOML file at startup; every field has a default so the
//! daemon runs without one. A file that exists but does not parse is a
//! startup error, not a silent fallback.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Default config file path.
pub const CONFIG_PATH: &str = "/etc/weatherd/config.toml";

/// Temperature unit used for the display headline, the report, and the
/// indicator thresholds alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    Fahrenheit,
    Celsius,
}

impl TempUnit {
    /// Single-letter suffix for the display headline.
    pub fn suffix(self) -> &'static str {
        match self {
            TempUnit::Fahrenheit => "F",
            TempUnit::Celsius => "C",
        }
    }

    /// Degree notation for the report.
    pub fn degrees(self) -> &'static str {
        match self {
            TempUnit::Fahrenheit => "°F",
            TempUnit::Celsius => "°C",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub indicator: IndicatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address for the update and report endpoints.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_unit")]
    pub unit: TempUnit,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Number of binary outputs in the bar.
    #[serde(default = "default_led_count")]
    pub led_count: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            led_count: default_led_count(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_unit() -> TempUnit {
    TempUnit::Fahrenheit
}

fn default_led_count() -> usize {
    7
}

impl Config {
    /// Load from `path`, or the default location when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
        if !path.exists() {
            info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.display.unit, TempUnit::Fahrenheit);
        assert_eq!(config.indicator.led_count, 7);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.indicator.led_count, 7);
    }

    #[test]
    fn full_toml_round_trips() {
        let config: Config = toml::from_str(
            r#"
            [server]
            bind = "127.0.0.1:9000"

            [display]
            unit = "celsius"

            [indicator]
            led_count = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.display.unit, TempUnit::Celsius);
        assert_eq!(config.indicator.led_count, 5);
    }

    #[test]
    fn unknown_unit_is_an_error() {
        let result: std::result::Result<Config, _> = toml::from_str(
            r#"
            [display]
            unit = "kelvin"
            "#,
        );
        assert!(result.is_err());
    }
}
