//! Domain entities

mod postal_record;
mod resolution;

pub use postal_record::PostalRecord;
pub use resolution::{
    ErrorKind, LocationQuery, ResolutionError, ResolutionState, ResolvedLocation,
};
