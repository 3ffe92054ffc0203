//! Numerical reduction of an unnormalized density to a Gaussian-compatible
//! `(mean, variance)` pair.
//!
//! The mean is the posterior mode and the variance mirrors the wider of the
//! two one-sided second moments around it. Swapping in the plain central
//! second moment changes how repeated updates converge.

pub mod grid;
pub mod matcher;

pub use grid::Grid;
pub use matcher::{MomentMatcher, NormalApprox};
