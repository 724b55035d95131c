//! Domain layer for the delivery locator
//!
//! Contains the vocabulary of location resolution: coordinates, PIN codes,
//! attempt tokens, provider address records and the resolution state shown
//! to the user. This layer performs no I/O.

pub mod address;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use address::{LOCATION_DETECTED, RawAddress, compose_display};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
