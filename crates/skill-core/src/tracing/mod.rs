//! Observability for the skill workspace.
//! `tracing` crate with `EnvFilter`, per-module log levels.

pub mod setup;

pub use setup::{env_filter, init_tracing, DEFAULT_FILTER, LOG_ENV};
