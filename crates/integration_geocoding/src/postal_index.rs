//! India Post PIN index client
//!
//! Looks up post offices by 6-digit PIN code via
//! [api.postalpincode.in](https://api.postalpincode.in).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::PostalIndexConfig;
use crate::error::PostalIndexError;
use crate::models::PostalIndexResponse;

/// Trait for postal index clients
#[async_trait]
pub trait PostalIndexClient: Send + Sync {
    /// Fetch the index entry for a PIN code
    async fn lookup(&self, pin_code: &str) -> Result<PostalIndexResponse, PostalIndexError>;
}

/// HTTP client for the India Post PIN index
#[derive(Debug)]
pub struct IndiaPostClient {
    client: Client,
    config: PostalIndexConfig,
}

impl IndiaPostClient {
    /// Create a new postal index client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &PostalIndexConfig) -> Result<Self, PostalIndexError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| PostalIndexError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl PostalIndexClient for IndiaPostClient {
    #[instrument(skip(self))]
    async fn lookup(&self, pin_code: &str) -> Result<PostalIndexResponse, PostalIndexError> {
        let url = format!(
            "{}/pincode/{pin_code}",
            self.config.base_url.trim_end_matches('/')
        );

        debug!(%pin_code, "Querying postal index");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PostalIndexError::from_transport(&e))?;

        if !response.status().is_success() {
            return Err(PostalIndexError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let entries: Vec<PostalIndexResponse> = response
            .json()
            .await
            .map_err(|e| PostalIndexError::ParseError(e.to_string()))?;

        entries
            .into_iter()
            .next()
            .ok_or_else(|| PostalIndexError::ParseError("empty response array".to_string()))
    }
}
