//! # Configuration
//!
//! Layered runtime settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults;
//! 2. an optional `vehicles.toml` in the working directory, or an explicit
//!    file which must then exist;
//! 3. environment variables prefixed `VEHICLES__`, nested with `__`
//!    (e.g. `VEHICLES__PRICING__BASE_URL`).
//!
//! # Examples
//!
//! ```
//! use vehicle_aggregation::config::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.pricing.base_url, "http://localhost:8762");
//! assert!(settings.validate().is_ok());
//! ```

use crate::application::services::enrichment::EnrichmentConfig;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default pricing service URL.
pub const DEFAULT_PRICING_URL: &str = "http://localhost:8762";

/// Default maps service URL.
pub const DEFAULT_MAPS_URL: &str = "http://localhost:9191";

/// Default HTTP request timeout for provider clients in milliseconds.
const DEFAULT_PROVIDER_TIMEOUT_MS: i64 = 5000;

/// Environment variable prefix.
const ENV_PREFIX: &str = "VEHICLES";

/// Error type for loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A source could not be read or deserialized.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    /// Settings were read but are not usable.
    #[error("invalid setting {key}: {message}")]
    Invalid {
        /// Dotted key of the offending setting.
        key: &'static str,
        /// Error message.
        message: String,
    },
}

impl SettingsError {
    /// Creates an invalid setting error.
    #[must_use]
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            message: message.into(),
        }
    }
}

/// Connection settings for one remote provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderSettings {
    /// Base URL of the service.
    pub base_url: String,
    /// HTTP request timeout in milliseconds.
    pub timeout_ms: u64,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Record store settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct StoreSettings {
    /// JSON file of vehicles loaded into the in-memory store at startup.
    pub seed_path: Option<PathBuf>,
}

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Pricing service.
    pub pricing: ProviderSettings,
    /// Maps service.
    pub maps: ProviderSettings,
    /// Read-time enrichment.
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
    /// Logging.
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Record store.
    #[serde(default)]
    pub store: StoreSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pricing: ProviderSettings {
                base_url: DEFAULT_PRICING_URL.to_string(),
                timeout_ms: DEFAULT_PROVIDER_TIMEOUT_MS as u64,
            },
            maps: ProviderSettings {
                base_url: DEFAULT_MAPS_URL.to_string(),
                timeout_ms: DEFAULT_PROVIDER_TIMEOUT_MS as u64,
            },
            enrichment: EnrichmentConfig::default(),
            logging: LoggingSettings::default(),
            store: StoreSettings::default(),
        }
    }
}

impl Settings {
    /// Loads settings from defaults, a config file and the environment.
    ///
    /// With `file = None`, `vehicles.toml` is used if present.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Load` if a source cannot be read or parsed
    /// and `SettingsError::Invalid` if validation fails.
    pub fn load(file: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(file, environment())
    }

    /// Loads settings using the given environment source.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::load`].
    pub fn load_with_env(file: Option<&Path>, env: Environment) -> Result<Self, SettingsError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name("vehicles").required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("pricing.base_url", DEFAULT_PRICING_URL)?
            .set_default("pricing.timeout_ms", DEFAULT_PROVIDER_TIMEOUT_MS)?
            .set_default("maps.base_url", DEFAULT_MAPS_URL)?
            .set_default("maps.timeout_ms", DEFAULT_PROVIDER_TIMEOUT_MS)?
            .add_source(file_source)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Invalid` naming the first bad setting.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_provider(&self.pricing, "pricing.base_url", "pricing.timeout_ms")?;
        validate_provider(&self.maps, "maps.base_url", "maps.timeout_ms")?;
        if self.enrichment.provider_timeout_ms == 0 {
            return Err(SettingsError::invalid(
                "enrichment.provider_timeout_ms",
                "must be greater than zero",
            ));
        }
        if self.enrichment.max_concurrency == 0 {
            return Err(SettingsError::invalid(
                "enrichment.max_concurrency",
                "must be greater than zero",
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::invalid("logging.level", "must not be empty"));
        }
        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn validate_provider(
    provider: &ProviderSettings,
    url_key: &'static str,
    timeout_key: &'static str,
) -> Result<(), SettingsError> {
    if !(provider.base_url.starts_with("http://") || provider.base_url.starts_with("https://")) {
        return Err(SettingsError::invalid(
            url_key,
            format!("expected an http(s) URL, got {:?}", provider.base_url),
        ));
    }
    if provider.timeout_ms == 0 {
        return Err(SettingsError::invalid(timeout_key, "must be greater than zero"));
    }
    Ok(())
}
