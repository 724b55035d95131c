//! Nominatim geocoding client
//!
//! Reverse geocoding and postal-code search against the
//! [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! Follows the public usage policy: every request carries a descriptive
//! User-Agent and requests are spaced at least `min_request_interval_ms` apart.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;
use crate::models::NominatimPlace;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert coordinates to a place with address details
    async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<NominatimPlace, GeocodingError>;

    /// Find the first place registered under a postal code
    async fn search_postal_code(
        &self,
        postal_code: &str,
    ) -> Result<Option<NominatimPlace>, GeocodingError>;
}

/// Nominatim-based geocoding client with request spacing
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
    last_request: Mutex<Option<Instant>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            last_request: Mutex::new(None),
        })
    }

    /// Wait until the configured interval since the previous request has passed
    async fn rate_limit(&self) {
        let interval = Duration::from_millis(self.config.min_request_interval_ms);
        if interval.is_zero() {
            return;
        }
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < interval {
                let wait = interval.saturating_sub(elapsed);
                debug!(?wait, "Rate limiting geocoding request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Response, GeocodingError> {
        self.rate_limit().await;

        let url = format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| GeocodingError::from_transport(&e))?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<NominatimPlace, GeocodingError> {
        let params = [
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
            ("accept-language", self.config.language.clone()),
        ];

        debug!(%latitude, %longitude, "Reverse geocoding");

        let place: NominatimPlace = self
            .get("reverse", &params)
            .await?
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        if let Some(error) = &place.error {
            debug!(%error, "Nominatim returned no address for coordinates");
        }
        Ok(place)
    }

    #[instrument(skip(self))]
    async fn search_postal_code(
        &self,
        postal_code: &str,
    ) -> Result<Option<NominatimPlace>, GeocodingError> {
        let params = [
            ("postalcode", postal_code.to_string()),
            ("country", self.config.country.clone()),
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
            ("limit", "1".to_string()),
        ];

        debug!(%postal_code, "Searching postal code");

        let places: Vec<NominatimPlace> = self
            .get("search", &params)
            .await?
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        Ok(places.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = NominatimGeocodingClient::new(&NominatimConfig::for_testing());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = NominatimConfig {
            base_url: String::new(),
            ..NominatimConfig::for_testing()
        };
        let err = NominatimGeocodingClient::new(&config).unwrap_err();
        assert!(matches!(err, GeocodingError::ConfigurationError(_)));
    }

    #[tokio::test]
    async fn test_rate_limit_spaces_requests() {
        let config = NominatimConfig {
            min_request_interval_ms: 50,
            ..NominatimConfig::for_testing()
        };
        let client = NominatimGeocodingClient::new(&config).unwrap();

        let start = Instant::now();
        client.rate_limit().await;
        client.rate_limit().await;
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_rate_limit_disabled() {
        let client = NominatimGeocodingClient::new(&NominatimConfig::for_testing()).unwrap();
        client.rate_limit().await;
        assert!(client.last_request.lock().await.is_none());
    }
}
