//! Mode-and-one-sided-spread approximation of an unnormalized density.

use skill_core::config::kernel_config::DEFAULT_EDGE_MARGIN;
use skill_core::config::KernelSettings;
use skill_core::errors::{Degeneracy, RatingError};
use skill_core::{DomainEdge, Rating};

use super::grid::Grid;
use crate::density::Density;

/// Gaussian stand-in for a posterior, ready to serve as the next prior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalApprox {
    pub rating: Rating,
    /// Integral of the unnormalized density over the domain.
    pub normalizer: f64,
    /// Set when the mode sits within the edge margin of a domain bound; the
    /// true posterior probably extends past the domain and was clipped.
    pub edge: Option<DomainEdge>,
}

/// Reduces a density to `(mode, 2 · max(left, right))` on a fixed grid, where
/// `left`/`right` are the normalized second moments on each side of the mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentMatcher {
    grid: Grid,
    edge_margin: f64,
}

impl MomentMatcher {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            edge_margin: DEFAULT_EDGE_MARGIN,
        }
    }

    /// The last grid point is `max - step`, so a margin below one step never
    /// flags the upper edge.
    pub fn with_edge_margin(mut self, margin: f64) -> Self {
        self.edge_margin = margin;
        self
    }

    pub fn from_settings(settings: &KernelSettings) -> Result<Self, RatingError> {
        let grid = Grid::new(settings.domain, settings.step)?;
        Ok(Self::new(grid).with_edge_margin(settings.edge_margin))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Normalize, find the mode, then measure the spread on each side of it.
    ///
    /// Fails with `DegenerateDensity` when the density has no usable mass in
    /// the domain or when all of it sits on the mode.
    pub fn approximate<D: Density + ?Sized>(&self, density: &D) -> Result<NormalApprox, RatingError> {
        let domain = self.grid.domain();
        let step = self.grid.step();

        let samples = self.grid.tabulate(density);
        let normalizer = self
            .grid
            .trapezoid_tabulated(&samples, density.eval(domain.max));
        if !normalizer.is_finite() || normalizer <= 0.0 {
            return Err(RatingError::DegenerateDensity(Degeneracy::ZeroIntegral {
                integral: normalizer,
            }));
        }

        // Strict comparison: the lowest maximizer wins ties.
        let mut mode = domain.min;
        let mut peak = 0.0;
        for &(x, y) in &samples {
            if y > peak {
                peak = y;
                mode = x;
            }
        }

        let mut left = 0.0;
        let mut right = 0.0;
        for &(x, y) in &samples {
            let moment = (x - mode) * (x - mode) * y / normalizer * step;
            if x < mode {
                left += moment;
            } else {
                right += moment;
            }
        }
        let variance = 2.0 * f64::max(left, right);

        tracing::trace!(
            grid_points = samples.len(),
            normalizer,
            mode,
            left_moment = left,
            right_moment = right,
            variance,
            "moment match"
        );

        if !variance.is_finite() || variance <= 0.0 {
            return Err(RatingError::DegenerateDensity(Degeneracy::ZeroVariance {
                mode,
                normalizer,
            }));
        }

        Ok(NormalApprox {
            rating: Rating { mean: mode, variance },
            normalizer,
            edge: domain.edge_near(mode, self.edge_margin),
        })
    }
}

impl Default for MomentMatcher {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}
