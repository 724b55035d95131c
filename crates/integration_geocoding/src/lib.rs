//! Geocoding integrations
//!
//! Provides PIN-code and coordinate lookups against three public services:
//!
//! - [India Post PIN index](https://api.postalpincode.in) for post-office records
//! - [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org) for reverse
//!   geocoding and postal-code search
//! - [ipapi.co](https://ipapi.co) for approximate coordinates from the host's
//!   public IP address
//!
//! # Architecture
//!
//! Each service is exposed as a client trait ([`GeocodingClient`],
//! [`PostalIndexClient`], [`IpLocateClient`]) with one HTTP implementation.
//! Clients return provider models; composing display strings is left to the
//! caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! let place = client.reverse(12.9716, 77.5946).await?;
//! ```

mod config;
mod error;
mod ip_locate;
mod models;
mod nominatim;
mod postal_index;

pub use config::{IpLocateConfig, NominatimConfig, PostalIndexConfig};
pub use error::{GeocodingError, IpLocateError, PostalIndexError};
pub use ip_locate::{IpApiClient, IpLocateClient};
pub use models::{IpLocation, NominatimPlace, PostOffice, PostalIndexResponse};
pub use nominatim::{GeocodingClient, NominatimGeocodingClient};
pub use postal_index::{IndiaPostClient, PostalIndexClient};
