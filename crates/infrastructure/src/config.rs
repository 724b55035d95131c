//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `locator.toml` in the working directory, then `LOCATOR_*` environment
//! variables (`__` separates nested keys, e.g.
//! `LOCATOR_NOMINATIM__BASE_URL`).

use std::path::Path;

use application::{ApplicationError, ResolverConfig};
use domain::GeoLocation;
use integration_geocoding::{IpLocateConfig, NominatimConfig, PostalIndexConfig};
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

/// Name of the optional configuration file (extension resolved by `config`)
const CONFIG_FILE_NAME: &str = "locator";

/// Environment variable prefix
const ENV_PREFIX: &str = "LOCATOR";

/// Where GPS-mode coordinates come from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoordinateSourceConfig {
    /// A fixed point
    Static {
        /// Latitude in degrees
        latitude: f64,
        /// Longitude in degrees
        longitude: f64,
    },
    /// Approximate position of the host's public IP address
    Ip,
    /// No positioning capability
    #[default]
    Unavailable,
}

impl CoordinateSourceConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Static {
                latitude,
                longitude,
            } => GeoLocation::new(*latitude, *longitude)
                .map(|_| ())
                .map_err(|e| format!("coordinates: {e}")),
            Self::Ip | Self::Unavailable => Ok(()),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Positioning parameters for GPS attempts
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Nominatim (reverse geocoding, PIN fallback)
    #[serde(default)]
    pub nominatim: NominatimConfig,

    /// India Post PIN index (PIN primary)
    #[serde(default)]
    pub postal_index: PostalIndexConfig,

    /// Coordinate source for GPS mode
    #[serde(default)]
    pub coordinates: CoordinateSourceConfig,

    /// IP geolocation service, used when `coordinates.kind = "ip"`
    #[serde(default)]
    pub ip_locate: IpLocateConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `locator.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::with_name(CONFIG_FILE_NAME).required(false),
            environment(),
        )
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true), environment())
    }

    fn build<F>(file: F, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?;
        config.try_deserialize()
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.resolver.validate()?;
        self.nominatim
            .validate()
            .and_then(|()| self.postal_index.validate())
            .and_then(|()| self.coordinates.validate())
            .and_then(|()| self.ip_locate.validate())
            .and_then(|()| self.telemetry.validate())
            .map_err(ApplicationError::Configuration)
    }
}

/// Environment source: `LOCATOR_SECTION__KEY=value`
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
