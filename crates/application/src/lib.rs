//! Application layer - Use cases and orchestration
//!
//! Defines the ports through which location data enters the system and the
//! services that turn a user request into a [`domain::ResolutionState`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
