//! Gaussian belief about a latent skill or difficulty scalar.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::RatingError;

/// Ratio between a difficulty band's width and the standard deviation of the
/// Gaussian seeded from it. Three puts roughly 85% of the mass inside the band.
pub const RANGE_STD_DIVISOR: f64 = 3.0;

/// A `(mean, variance)` pair. Immutable by convention: every update produces
/// a fresh value that supersedes the prior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub mean: f64,
    pub variance: f64,
}

impl Rating {
    /// Create a validated rating.
    pub fn new(mean: f64, variance: f64) -> Result<Self, RatingError> {
        let rating = Self { mean, variance };
        rating.validate()?;
        Ok(rating)
    }

    /// Create a rating from a mean and standard deviation.
    pub fn from_std(mean: f64, std_dev: f64) -> Result<Self, RatingError> {
        Self::new(mean, std_dev * std_dev)
    }

    /// Convert an expert-assigned band `[low, high]` into a Gaussian centred on
    /// the band with std `(high - low) / 3`.
    pub fn from_range(low: f64, high: f64) -> Result<Self, RatingError> {
        Self::from_std((low + high) / 2.0, (high - low) / RANGE_STD_DIVISOR)
    }

    /// Check the invariants: finite mean, finite and strictly positive variance.
    ///
    /// Deserialized values skip `new`, so the kernel re-checks on entry.
    pub fn validate(&self) -> Result<(), RatingError> {
        if !self.mean.is_finite() {
            return Err(RatingError::InvalidMean { mean: self.mean });
        }
        if !self.variance.is_finite() || self.variance <= 0.0 {
            return Err(RatingError::InvalidVariance {
                variance: self.variance,
            });
        }
        Ok(())
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ± {:.1}", self.mean, self.std_dev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_positive_variance() {
        assert_eq!(
            Rating::new(300.0, 0.0),
            Err(RatingError::InvalidVariance { variance: 0.0 })
        );
        assert!(Rating::new(300.0, -1.0).is_err());
        assert!(Rating::new(300.0, f64::NAN).is_err());
        assert!(Rating::new(300.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite_mean() {
        assert!(matches!(
            Rating::new(f64::NAN, 1.0),
            Err(RatingError::InvalidMean { .. })
        ));
    }

    #[test]
    fn test_from_range_centres_band() {
        let r = Rating::from_range(600.0, 900.0).unwrap();
        assert_eq!(r.mean, 750.0);
        assert!((r.std_dev() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_range_rejects_empty_band() {
        assert!(Rating::from_range(500.0, 500.0).is_err());
    }

    #[test]
    fn test_display() {
        let r = Rating::from_std(300.0, 500.0).unwrap();
        assert_eq!(r.to_string(), "300.0 ± 500.0");
    }
}
