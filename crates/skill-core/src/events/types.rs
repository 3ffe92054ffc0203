//! Event payload types.

use crate::errors::Degeneracy;
use crate::types::{DomainEdge, Rating, Side};

/// Payload for `on_density_curve`: the unnormalized posterior sampled on a
/// coarse grid, for plotting.
#[derive(Debug, Clone)]
pub struct DensityCurveEvent {
    pub side: Side,
    pub points: Vec<(f64, f64)>,
}

/// Payload for `on_rating_adjusted`.
#[derive(Debug, Clone)]
pub struct RatingAdjustedEvent {
    pub solved: bool,
    pub user_before: Rating,
    pub user_after: Rating,
    pub problem_before: Rating,
    pub problem_after: Rating,
}

/// Payload for `on_domain_exceeded`.
#[derive(Debug, Clone)]
pub struct DomainExceededEvent {
    pub side: Side,
    pub mode: f64,
    pub edge: DomainEdge,
}

/// Payload for `on_degenerate_density`: a side collapsed and a floor
/// variance was substituted.
#[derive(Debug, Clone)]
pub struct DegenerateDensityEvent {
    pub side: Side,
    pub degeneracy: Degeneracy,
    pub substituted: Rating,
}
