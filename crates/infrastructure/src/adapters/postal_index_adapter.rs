//! Postal index adapter - Implements PostalLookupPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::PostalLookupPort;
use async_trait::async_trait;
use domain::{PinCode, PostalRecord};
use integration_geocoding::{
    IndiaPostClient, PostalIndexClient, PostalIndexConfig, PostalIndexError,
};
use tracing::{debug, instrument};

/// Adapter for the India Post PIN index
#[derive(Debug)]
pub struct PostalIndexAdapter {
    client: IndiaPostClient,
}

impl PostalIndexAdapter {
    pub const fn new(client: IndiaPostClient) -> Self {
        Self { client }
    }

    /// Create an adapter with its own HTTP client
    pub fn from_config(config: &PostalIndexConfig) -> Result<Self, ApplicationError> {
        IndiaPostClient::new(config)
            .map(Self::new)
            .map_err(map_postal_error)
    }
}

#[async_trait]
impl PostalLookupPort for PostalIndexAdapter {
    #[instrument(skip(self), fields(pin = %pin))]
    async fn lookup(&self, pin: &PinCode) -> Result<Option<PostalRecord>, ApplicationError> {
        let response = self
            .client
            .lookup(pin.as_str())
            .await
            .map_err(map_postal_error)?;

        let record = response.first_office().map(PostalRecord::from);
        if record.is_none() {
            debug!(
                status = %response.status,
                message = ?response.message,
                "No post office for PIN"
            );
        }
        Ok(record)
    }
}

fn map_postal_error(e: PostalIndexError) -> ApplicationError {
    match e {
        PostalIndexError::ParseError(msg) => {
            ApplicationError::InvalidResponse(format!("Postal index: {msg}"))
        },
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_map_to_invalid_response() {
        let err = map_postal_error(PostalIndexError::ParseError("expected array".to_string()));
        assert!(matches!(err, ApplicationError::InvalidResponse(_)));
    }

    #[test]
    fn transport_errors_map_to_external_service() {
        let err = map_postal_error(PostalIndexError::Timeout);
        assert!(matches!(err, ApplicationError::ExternalService(_)));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn adapter_from_default_config() {
        assert!(PostalIndexAdapter::from_config(&PostalIndexConfig::default()).is_ok());
    }
}
