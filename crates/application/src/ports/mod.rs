//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod coordinate_source_port;
mod geocoder_port;
mod postal_lookup_port;

#[cfg(test)]
pub use coordinate_source_port::MockCoordinateSourcePort;
pub use coordinate_source_port::{CoordinateSourcePort, PositionError, PositionOptions};
#[cfg(test)]
pub use geocoder_port::MockGeocoderPort;
pub use geocoder_port::GeocoderPort;
#[cfg(test)]
pub use postal_lookup_port::MockPostalLookupPort;
pub use postal_lookup_port::PostalLookupPort;
