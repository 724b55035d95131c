//! Application services
//!
//! Services orchestrate domain logic and port interactions.

mod location_resolver;
mod provider_chain;

pub use location_resolver::{LocationResolver, ResolverConfig};
pub use provider_chain::{ChainStep, LookupOutcome, ProviderChain};
