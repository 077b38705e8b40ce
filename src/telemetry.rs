//! Logging setup.
//!
//! `RUST_LOG` takes precedence; when it is unset or unparsable the configured
//! `NOVA_LOG_LEVEL` is used. A rejected `RUST_LOG` is reported once the
//! subscriber is up.

use std::fmt;

use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::TelemetryConfig;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => write!(f, "invalid NOVA_LOG_LEVEL '{value}'"),
            TelemetryError::Subscriber(err) => write!(f, "failed to install log subscriber: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// The filter to install, plus the `RUST_LOG` value that was rejected, if any.
#[derive(Debug)]
pub struct FilterChoice {
    pub filter: EnvFilter,
    pub rejected: Option<(String, ParseError)>,
}

/// Pick the log filter from an optional `RUST_LOG` value and the configured level.
pub fn build_filter(rust_log: Option<&str>, config: &TelemetryConfig) -> Result<FilterChoice, TelemetryError> {
    let mut rejected = None;
    if let Some(raw) = rust_log.filter(|s| !s.trim().is_empty()) {
        match EnvFilter::try_new(raw) {
            Ok(filter) => return Ok(FilterChoice { filter, rejected }),
            Err(err) => rejected = Some((raw.to_string(), err)),
        }
    }

    let filter = EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
        value: config.log_level.clone(),
        source,
    })?;
    Ok(FilterChoice { filter, rejected })
}

/// Install the global subscriber on stderr; stdout carries reports and CSV.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let choice = build_filter(rust_log.as_deref(), config)?;

    tracing_subscriber::fmt()
        .with_env_filter(choice.filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)?;

    if let Some((value, err)) = choice.rejected {
        warn!(rust_log = %value, error = %err, fallback = %config.log_level, "ignoring invalid RUST_LOG");
    }
    Ok(())
}
