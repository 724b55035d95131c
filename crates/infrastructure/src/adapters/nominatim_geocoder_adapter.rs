//! Nominatim adapter - Implements GeocoderPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::GeocoderPort;
use async_trait::async_trait;
use domain::{GeoLocation, PinCode, RawAddress};
use integration_geocoding::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient, NominatimPlace,
};
use tracing::instrument;

/// Adapter for Nominatim reverse geocoding and postal-code search
#[derive(Debug)]
pub struct NominatimGeocoderAdapter {
    client: NominatimGeocodingClient,
}

impl NominatimGeocoderAdapter {
    pub const fn new(client: NominatimGeocodingClient) -> Self {
        Self { client }
    }

    /// Create an adapter with its own HTTP client
    pub fn from_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        NominatimGeocodingClient::new(config)
            .map(Self::new)
            .map_err(map_geocoding_error)
    }
}

#[async_trait]
impl GeocoderPort for NominatimGeocoderAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn reverse(&self, location: &GeoLocation) -> Result<RawAddress, ApplicationError> {
        self.client
            .reverse(location.latitude(), location.longitude())
            .await
            .map(address_of)
            .map_err(map_geocoding_error)
    }

    #[instrument(skip(self), fields(pin = %pin))]
    async fn search_postal_code(
        &self,
        pin: &PinCode,
    ) -> Result<Option<RawAddress>, ApplicationError> {
        self.client
            .search_postal_code(pin.as_str())
            .await
            .map(|place| place.map(address_of))
            .map_err(map_geocoding_error)
    }
}

/// A place without address details yields an empty record
fn address_of(place: NominatimPlace) -> RawAddress {
    place.address.unwrap_or_default()
}

fn map_geocoding_error(e: GeocodingError) -> ApplicationError {
    match e {
        GeocodingError::ParseError(msg) => {
            ApplicationError::InvalidResponse(format!("Nominatim: {msg}"))
        },
        GeocodingError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_without_address_is_empty_record() {
        let place = NominatimPlace {
            error: Some("Unable to geocode".to_string()),
            ..NominatimPlace::default()
        };
        assert_eq!(address_of(place), RawAddress::default());
    }

    #[test]
    fn error_mapping() {
        assert!(matches!(
            map_geocoding_error(GeocodingError::ParseError("eof".to_string())),
            ApplicationError::InvalidResponse(_)
        ));
        assert!(matches!(
            map_geocoding_error(GeocodingError::ConfigurationError("empty".to_string())),
            ApplicationError::Configuration(_)
        ));
        assert!(matches!(
            map_geocoding_error(GeocodingError::RequestFailed("HTTP 429".to_string())),
            ApplicationError::ExternalService(_)
        ));
    }

    #[test]
    fn invalid_config_is_configuration_error() {
        let config = NominatimConfig {
            user_agent: String::new(),
            ..NominatimConfig::for_testing()
        };
        assert!(matches!(
            NominatimGeocoderAdapter::from_config(&config),
            Err(ApplicationError::Configuration(_))
        ));
    }
}
