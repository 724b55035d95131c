//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod coordinate_source_adapter;
mod nominatim_geocoder_adapter;
mod postal_index_adapter;

pub use coordinate_source_adapter::{
    IpCoordinateSource, StaticCoordinateSource, UnavailableCoordinateSource,
};
pub use nominatim_geocoder_adapter::NominatimGeocoderAdapter;
pub use postal_index_adapter::PostalIndexAdapter;
