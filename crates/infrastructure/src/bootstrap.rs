//! Wiring of the resolver from configuration

use std::sync::Arc;

use application::{ApplicationError, CoordinateSourcePort, LocationResolver, ProviderChain};
use domain::GeoLocation;
use integration_geocoding::IpLocateConfig;
use tracing::info;

use crate::adapters::{
    IpCoordinateSource, NominatimGeocoderAdapter, PostalIndexAdapter, StaticCoordinateSource,
    UnavailableCoordinateSource,
};
use crate::config::{AppConfig, CoordinateSourceConfig};

/// Build a resolver backed by the configured providers
///
/// Validates the configuration first; no network calls are made.
pub fn build_resolver(config: &AppConfig) -> Result<LocationResolver, ApplicationError> {
    config.validate()?;

    let postal = PostalIndexAdapter::from_config(&config.postal_index)?;
    let geocoder = NominatimGeocoderAdapter::from_config(&config.nominatim)?;
    let chain = ProviderChain::new(Arc::new(postal), Arc::new(geocoder));
    let coordinates = build_coordinate_source(&config.coordinates, &config.ip_locate)?;

    info!(
        postal_index = %config.postal_index.base_url,
        nominatim = %config.nominatim.base_url,
        coordinates = ?config.coordinates,
        "Resolver configured"
    );

    Ok(LocationResolver::new(
        chain,
        coordinates,
        config.resolver.clone(),
    ))
}

/// Build the coordinate source selected in configuration
pub fn build_coordinate_source(
    source: &CoordinateSourceConfig,
    ip_locate: &IpLocateConfig,
) -> Result<Arc<dyn CoordinateSourcePort>, ApplicationError> {
    Ok(match source {
        CoordinateSourceConfig::Static {
            latitude,
            longitude,
        } => Arc::new(StaticCoordinateSource::new(GeoLocation::new(
            *latitude, *longitude,
        )?)),
        CoordinateSourceConfig::Ip => Arc::new(
            IpCoordinateSource::from_config(ip_locate)
                .map_err(|e| ApplicationError::ExternalService(e.to_string()))?,
        ),
        CoordinateSourceConfig::Unavailable => Arc::new(UnavailableCoordinateSource),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::PositionOptions;
    use domain::{ErrorKind, LocationMode, ResolutionState};

    #[test]
    fn build_with_defaults() {
        let resolver = build_resolver(&AppConfig::default()).unwrap();
        assert_eq!(resolver.state(), ResolutionState::Idle);
        assert_eq!(resolver.mode(), LocationMode::Gps);
    }

    #[test]
    fn build_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.nominatim.base_url = String::new();
        assert!(matches!(
            build_resolver(&config),
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn unavailable_source_fails_gps_as_unsupported() {
        let resolver = build_resolver(&AppConfig::default()).unwrap();
        let state = resolver.start_gps_resolution().await;
        assert_eq!(state.error_kind(), Some(ErrorKind::Unsupported));
    }

    #[tokio::test]
    async fn static_source_reports_configured_point() {
        let source = build_coordinate_source(
            &CoordinateSourceConfig::Static {
                latitude: 12.9716,
                longitude: 77.5946,
            },
            &IpLocateConfig::default(),
        )
        .unwrap();
        let position = source
            .current_position(&PositionOptions::default())
            .await
            .unwrap();
        assert!((position.latitude() - 12.9716).abs() < f64::EPSILON);
    }

    #[test]
    fn static_source_rejects_out_of_range_point() {
        let result = build_coordinate_source(
            &CoordinateSourceConfig::Static {
                latitude: 0.0,
                longitude: 200.0,
            },
            &IpLocateConfig::default(),
        );
        assert!(matches!(result, Err(ApplicationError::Domain(_))));
    }
}
