//! Runtime configuration loaded from the environment (and an optional `.env`).
//!
//! CLI flags always win over anything configured here.

use std::env;
use std::fmt;
use std::path::PathBuf;

/// Default dataset size used by `nova generate` (matches the data explorer).
pub const DEFAULT_DATASET_SIZE: usize = 10_000;

const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_STORE_PATH: &str = "nova_users.json";

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Default seed for stochastic commands. `None` means "draw from entropy".
    pub seed: Option<u64>,
    pub dataset_size: usize,
    pub store_path: PathBuf,
    pub telemetry: TelemetryConfig,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup("NOVA_SEED").filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?,
            ),
            None => None,
        };

        let dataset_size = match lookup("NOVA_DATASET_SIZE").filter(|s| !s.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidDatasetSize(raw.clone()))?,
            None => DEFAULT_DATASET_SIZE,
        };

        let store_path = lookup("NOVA_STORE_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

        let log_level = lookup("NOVA_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            seed,
            dataset_size,
            store_path,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSeed(String),
    InvalidDatasetSize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSeed(raw) => write!(f, "NOVA_SEED must be a u64 (got '{raw}')"),
            ConfigError::InvalidDatasetSize(raw) => {
                write!(f, "NOVA_DATASET_SIZE must be a non-negative integer (got '{raw}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.dataset_size, DEFAULT_DATASET_SIZE);
        assert_eq!(config.store_path, PathBuf::from("nova_users.json"));
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("NOVA_SEED", "42"),
            ("NOVA_DATASET_SIZE", "250"),
            ("NOVA_STORE_PATH", "/tmp/users.json"),
            ("NOVA_LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.dataset_size, 250);
        assert_eq!(config.store_path, PathBuf::from("/tmp/users.json"));
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    fn rejects_bad_seed() {
        let err = AppConfig::from_lookup(lookup_from(&[("NOVA_SEED", "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed(_)));
    }
}
