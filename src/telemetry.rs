//! # Telemetry
//!
//! Global `tracing` subscriber setup.
//!
//! `RUST_LOG` takes precedence over the configured level. An unparsable
//! level falls back to `info`.

use crate::config::LoggingSettings;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Fallback filter directive.
const DEFAULT_DIRECTIVE: &str = "info";

/// Builds the filter for the given settings.
#[must_use]
pub fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(&settings.level))
}

/// Parses a configured directive, falling back to `info` if it is invalid.
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`TryInitError`] if a global subscriber is already set.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), TryInitError> {
    let json_layer = settings
        .json
        .then(|| tracing_subscriber::fmt::layer().json().with_target(true));
    let text_layer = (!settings.json).then(|| tracing_subscriber::fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(env_filter(settings))
        .with(json_layer)
        .with(text_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_falls_back() {
        assert_eq!(level_filter("vehicle_aggregation=loud").to_string(), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn configured_level_is_used() {
        assert_eq!(level_filter("debug").to_string(), "debug");
    }

    #[test]
    fn second_init_fails() {
        let settings = LoggingSettings::default();
        let _ = init_tracing(&settings);
        assert!(init_tracing(&settings).is_err());
    }
}
