//! Shared foundation for the skill rating workspace: rating types, errors,
//! configuration, diagnostic events and tracing setup.

pub mod config;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use types::{Domain, DomainEdge, Rating, Side};
