//! Coordinate sources - Implement CoordinateSourcePort for hosts without a GPS device

use application::ports::{CoordinateSourcePort, PositionError, PositionOptions};
use async_trait::async_trait;
use domain::GeoLocation;
use integration_geocoding::{IpApiClient, IpLocateClient, IpLocateConfig, IpLocateError};
use tracing::{debug, instrument, warn};

/// Always reports the same configured position
#[derive(Debug, Clone, Copy)]
pub struct StaticCoordinateSource {
    location: GeoLocation,
}

impl StaticCoordinateSource {
    pub const fn new(location: GeoLocation) -> Self {
        Self { location }
    }
}

#[async_trait]
impl CoordinateSourcePort for StaticCoordinateSource {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<GeoLocation, PositionError> {
        Ok(self.location)
    }
}

/// Approximates the position from the host's public IP address
#[derive(Debug)]
pub struct IpCoordinateSource {
    client: IpApiClient,
}

impl IpCoordinateSource {
    pub const fn new(client: IpApiClient) -> Self {
        Self { client }
    }

    /// Create a source with its own HTTP client
    pub fn from_config(config: &IpLocateConfig) -> Result<Self, IpLocateError> {
        IpApiClient::new(config).map(Self::new)
    }
}

#[async_trait]
impl CoordinateSourcePort for IpCoordinateSource {
    #[instrument(skip(self))]
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<GeoLocation, PositionError> {
        if options.high_accuracy {
            debug!("IP geolocation is city-level; high accuracy not available");
        }

        let (latitude, longitude) = self.client.locate().await.map_err(|e| {
            warn!(error = %e, "IP geolocation failed");
            match e {
                IpLocateError::Timeout => PositionError::Timeout,
                _ => PositionError::PositionUnavailable,
            }
        })?;

        GeoLocation::new(latitude, longitude).map_err(|e| PositionError::Other(e.to_string()))
    }
}

/// A host with no positioning capability
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableCoordinateSource;

#[async_trait]
impl CoordinateSourcePort for UnavailableCoordinateSource {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<GeoLocation, PositionError> {
        Err(PositionError::Unsupported)
    }
}
