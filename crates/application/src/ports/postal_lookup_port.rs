//! Postal index port
//!
//! Primary provider for PIN lookups.

use async_trait::async_trait;
use domain::{PinCode, PostalRecord};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for looking up the post offices registered under a PIN code
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PostalLookupPort: Send + Sync {
    /// Look up the first post office for a PIN code
    ///
    /// Returns `Ok(None)` when the provider explicitly reports no match,
    /// and an error for transport failures or malformed responses.
    async fn lookup(&self, pin: &PinCode) -> Result<Option<PostalRecord>, ApplicationError>;
}
