//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the geocoding integrations,
//! loads configuration and installs the tracing subscriber.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use bootstrap::{build_coordinate_source, build_resolver};
pub use config::{AppConfig, CoordinateSourceConfig};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
