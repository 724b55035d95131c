//! IP geolocation client
//!
//! Approximates the host's coordinates from its public IP address, for
//! machines without a positioning device.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::IpLocateConfig;
use crate::error::IpLocateError;
use crate::models::IpLocation;

/// Trait for IP geolocation clients
#[async_trait]
pub trait IpLocateClient: Send + Sync {
    /// Locate the caller's public IP address as `(latitude, longitude)`
    async fn locate(&self) -> Result<(f64, f64), IpLocateError>;
}

/// ipapi.co client
#[derive(Debug)]
pub struct IpApiClient {
    client: Client,
    config: IpLocateConfig,
}

impl IpApiClient {
    /// Create a new IP locate client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &IpLocateConfig) -> Result<Self, IpLocateError> {
        let mut builder = Client::builder().user_agent(concat!(
            "delivery-locator/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| IpLocateError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl IpLocateClient for IpApiClient {
    #[instrument(skip(self))]
    async fn locate(&self) -> Result<(f64, f64), IpLocateError> {
        let url = format!("{}/json/", self.config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| IpLocateError::from_transport(&e))?;

        if !response.status().is_success() {
            return Err(IpLocateError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let location: IpLocation = response
            .json()
            .await
            .map_err(|e| IpLocateError::ParseError(e.to_string()))?;

        if location.error {
            return Err(IpLocateError::ServiceError(
                location.reason.unwrap_or_else(|| "unknown".to_string()),
            ));
        }

        match (location.latitude, location.longitude) {
            (Some(lat), Some(lon)) => {
                debug!(%lat, %lon, city = ?location.city, "Located by IP");
                Ok((lat, lon))
            },
            _ => Err(IpLocateError::ParseError(
                "response has no coordinates".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(IpApiClient::new(&IpLocateConfig::default()).is_ok());
    }
}
