//! Ordered provider lookups for PIN codes and coordinates
//!
//! PIN lookups walk [`ChainStep::PIN_ORDER`] until a step yields a display
//! string. A transport failure at any step makes the failure a network
//! error; only unanimous "no match" answers make it not-found.

use std::fmt;
use std::sync::Arc;

use domain::{ErrorKind, GeoLocation, PinCode, ResolutionError, compose_display};
use tracing::{debug, instrument, warn};

use crate::ports::{GeocoderPort, PostalLookupPort};

/// One provider consulted by the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStep {
    /// Dedicated postal index (primary)
    PostalIndex,
    /// General-purpose geocoder postal search (fallback)
    Geocoder,
}

impl ChainStep {
    /// Order in which PIN lookups consult providers
    pub const PIN_ORDER: [Self; 2] = [Self::PostalIndex, Self::Geocoder];
}

impl fmt::Display for ChainStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PostalIndex => write!(f, "postal_index"),
            Self::Geocoder => write!(f, "geocoder"),
        }
    }
}

/// Result of one chain step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The provider matched; carries the composed display string
    Found(String),
    /// The provider answered that it has no data
    NoMatch,
    /// Transport or parse failure
    Unreachable(String),
}

impl LookupOutcome {
    /// Whether the provider could not be reached or parsed
    const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }
}

/// Postal-index-first lookup with geocoder fallback
#[derive(Clone)]
pub struct ProviderChain {
    postal: Arc<dyn PostalLookupPort>,
    geocoder: Arc<dyn GeocoderPort>,
}

impl fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderChain")
            .field("steps", &ChainStep::PIN_ORDER)
            .finish_non_exhaustive()
    }
}

impl ProviderChain {
    pub fn new(postal: Arc<dyn PostalLookupPort>, geocoder: Arc<dyn GeocoderPort>) -> Self {
        Self { postal, geocoder }
    }

    /// Resolve a normalized PIN code to a display string
    ///
    /// Stops at the first step that finds a record.
    #[instrument(skip(self), fields(pin = %pin))]
    pub async fn resolve_pin(&self, pin: &PinCode) -> Result<String, ResolutionError> {
        let mut any_unreachable = false;

        for step in ChainStep::PIN_ORDER {
            let outcome = self.run_step(step, pin).await;
            any_unreachable |= outcome.is_unreachable();
            match outcome {
                LookupOutcome::Found(found) => {
                    debug!(%step, resolved = %found, "PIN resolved");
                    return Ok(found);
                },
                LookupOutcome::NoMatch => debug!(%step, "Provider has no match"),
                LookupOutcome::Unreachable(reason) => {
                    warn!(%step, reason = %reason, "Provider lookup failed");
                },
            }
        }

        let kind = if any_unreachable {
            ErrorKind::NetworkError
        } else {
            ErrorKind::NotFound
        };
        Err(ResolutionError::new(kind))
    }

    /// Resolve coordinates to a display string via reverse geocoding
    #[instrument(skip(self), fields(location = %location))]
    pub async fn reverse(&self, location: &GeoLocation) -> Result<String, ResolutionError> {
        match self.geocoder.reverse(location).await {
            Ok(address) => Ok(compose_display(&address)),
            Err(e) => {
                warn!(error = %e, "Reverse geocoding failed");
                Err(ResolutionError::new(ErrorKind::NetworkError))
            },
        }
    }

    async fn run_step(&self, step: ChainStep, pin: &PinCode) -> LookupOutcome {
        match step {
            ChainStep::PostalIndex => match self.postal.lookup(pin).await {
                Ok(Some(record)) => LookupOutcome::Found(record.display_for(pin)),
                Ok(None) => LookupOutcome::NoMatch,
                Err(e) => LookupOutcome::Unreachable(e.to_string()),
            },
            ChainStep::Geocoder => match self.geocoder.search_postal_code(pin).await {
                Ok(Some(address)) => LookupOutcome::Found(compose_display(&address)),
                Ok(None) => LookupOutcome::NoMatch,
                Err(e) => LookupOutcome::Unreachable(e.to_string()),
            },
        }
    }
}
