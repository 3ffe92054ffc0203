//! Fixed-step grid over a bounded domain.

use skill_core::config::kernel_config::{
    too_fine, DEFAULT_CURVE_STEP, DEFAULT_STEP, MAX_GRID_POINTS,
};
use skill_core::errors::RatingError;
use skill_core::Domain;

use crate::density::Density;

/// Evenly spaced points `min, min + step, ...` strictly below `max`.
///
/// The step trades precision for cost: every pass evaluates the density
/// once per point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    domain: Domain,
    step: f64,
}

impl Grid {
    pub fn new(domain: Domain, step: f64) -> Result<Self, RatingError> {
        let domain = Domain::new(domain.min, domain.max)?;
        if !step.is_finite() || step <= 0.0 {
            return Err(RatingError::InvalidGrid {
                message: format!("step {step} must be finite and > 0"),
            });
        }
        if step > domain.width() {
            return Err(RatingError::InvalidGrid {
                message: format!("step {step} is wider than the domain ({})", domain.width()),
            });
        }
        if too_fine(domain.width(), step) {
            return Err(RatingError::InvalidGrid {
                message: format!("step {step} yields more than {MAX_GRID_POINTS} grid points"),
            });
        }
        Ok(Self { domain, step })
    }

    /// Coarse grid over the default domain for diagnostic curves.
    pub fn diagnostic() -> Self {
        Self {
            domain: Domain::default(),
            step: DEFAULT_CURVE_STEP,
        }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        let n = (self.domain.width() / self.step).ceil() as usize;
        (0..n)
            .map(move |i| self.domain.min + i as f64 * self.step)
            .filter(move |&x| x < self.domain.max)
    }

    pub fn len(&self) -> usize {
        self.points().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluate `density` at every grid point.
    pub fn tabulate<D: Density + ?Sized>(&self, density: &D) -> Vec<(f64, f64)> {
        self.points().map(|x| (x, density.eval(x))).collect()
    }

    /// Trapezoid rule over `[min, max]`.
    pub fn trapezoid<D: Density + ?Sized>(&self, density: &D) -> f64 {
        let samples = self.tabulate(density);
        self.trapezoid_tabulated(&samples, density.eval(self.domain.max))
    }

    /// Trapezoid rule over already tabulated grid values, closing the last
    /// (possibly partial) segment with `at_max`, the density at `max`.
    pub fn trapezoid_tabulated(&self, samples: &[(f64, f64)], at_max: f64) -> f64 {
        let closing = std::iter::once((self.domain.max, at_max));
        let mut iter = samples.iter().copied().chain(closing);
        let Some((mut prev_x, mut prev_y)) = iter.next() else {
            return 0.0;
        };
        let mut total = 0.0;
        for (x, y) in iter {
            total += 0.5 * (prev_y + y) * (x - prev_x);
            prev_x = x;
            prev_y = y;
        }
        total
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            domain: Domain::default(),
            step: DEFAULT_STEP,
        }
    }
}
