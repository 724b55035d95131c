//! General-purpose geocoder port
//!
//! Sole provider for GPS mode, fallback provider for PIN mode.

use async_trait::async_trait;
use domain::{GeoLocation, PinCode, RawAddress};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward and reverse geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    /// Resolve coordinates to an address record
    ///
    /// A provider answer without address details, including an explicit
    /// "unable to geocode" reply, yields an empty record rather than an
    /// error. It composes to "Location detected", so the GPS path never
    /// reports `NotFound`; only transport or parse failures are errors.
    async fn reverse(&self, location: &GeoLocation) -> Result<RawAddress, ApplicationError>;

    /// Find the first address registered under a PIN code
    ///
    /// Returns `Ok(None)` when the provider has no match.
    async fn search_postal_code(
        &self,
        pin: &PinCode,
    ) -> Result<Option<RawAddress>, ApplicationError>;
}
