//! Configuration loading from the environment and from disk.
//!
//! Connection and mode settings follow the original deployment contract:
//! `ES_URL`, `ES_API_KEY`, `INDEX_NAME`, `MODE`, `BACKFILL_DAYS`,
//! `BACKFILL_INTERVAL_MINUTES`, `CONTINUOUS_SCENARIO`,
//! `CONTINUOUS_INTERVAL_SECONDS`. A queue topology TOML file may replace the
//! built-in payments topology.

use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::config::schema::{GeneratorConfig, QueueTopology};
use crate::config::validation::{validate_topology, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),

    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to read topology file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse topology file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("topology validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration through an arbitrary variable lookup.
///
/// The binary passes a lookup that merges CLI flags over `std::env::var`;
/// tests pass a plain map so they never mutate process-global environment
/// state.
pub fn load_with<F>(lookup: F) -> Result<GeneratorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = GeneratorConfig::default();

    config.elasticsearch.url = lookup("ES_URL")
        .map(|u| u.trim_end_matches('/').to_string())
        .ok_or(ConfigError::MissingVar("ES_URL"))?;
    config.elasticsearch.api_key =
        lookup("ES_API_KEY").ok_or(ConfigError::MissingVar("ES_API_KEY"))?;
    if let Some(index) = lookup("INDEX_NAME") {
        config.elasticsearch.index_name = index;
    }

    if let Some(mode) = lookup("MODE") {
        config.mode = parse_var("MODE", &mode)?;
    }
    if let Some(days) = lookup("BACKFILL_DAYS") {
        config.backfill.days = parse_var("BACKFILL_DAYS", &days)?;
    }
    if let Some(minutes) = lookup("BACKFILL_INTERVAL_MINUTES") {
        config.backfill.interval_minutes = parse_var("BACKFILL_INTERVAL_MINUTES", &minutes)?;
        require_nonzero(
            "BACKFILL_INTERVAL_MINUTES",
            config.backfill.interval_minutes as u64,
        )?;
    }
    if let Some(scenario) = lookup("CONTINUOUS_SCENARIO") {
        config.continuous.scenario = scenario;
    }
    if let Some(seconds) = lookup("CONTINUOUS_INTERVAL_SECONDS") {
        config.continuous.interval_seconds = parse_var("CONTINUOUS_INTERVAL_SECONDS", &seconds)?;
        require_nonzero(
            "CONTINUOUS_INTERVAL_SECONDS",
            config.continuous.interval_seconds,
        )?;
    }

    Ok(config)
}

/// A zero interval would stall the emission loops, so it is a config error.
fn require_nonzero(name: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidVar {
            name,
            value: "0".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

fn parse_var<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Load and validate a queue topology from a TOML file.
pub fn load_topology(path: &Path) -> Result<QueueTopology, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let topology: QueueTopology = toml::from_str(&content)?;

    validate_topology(&topology.queues).map_err(ConfigError::Validation)?;

    Ok(topology)
}
