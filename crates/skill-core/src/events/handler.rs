//! RatingEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing kernel events.
///
/// Handlers only override what they care about. `Send + Sync` because the
/// two sides of an adjustment may run on different threads.
pub trait RatingEventHandler: Send + Sync {
    fn on_density_curve(&self, _event: &DensityCurveEvent) {}
    fn on_rating_adjusted(&self, _event: &RatingAdjustedEvent) {}
    fn on_domain_exceeded(&self, _event: &DomainExceededEvent) {}
    fn on_degenerate_density(&self, _event: &DegenerateDensityEvent) {}
}
