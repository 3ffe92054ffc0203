//! Probit contest model: chance that skill `x` beats an opponent drawn from
//! a Gaussian.

use skill_core::errors::RatingError;
use skill_core::Rating;
use statrs::distribution::{ContinuousCDF, Normal};

/// `P(outcome | x)` against a fixed opponent distribution.
///
/// A win is the opponent's CDF at `x`; a loss is its survival function,
/// evaluated directly so the far tail does not cancel to zero.
#[derive(Debug, Clone)]
pub struct WinLikelihood {
    opponent: Normal,
    won: bool,
}

impl WinLikelihood {
    pub fn new(opponent: &Rating, won: bool) -> Result<Self, RatingError> {
        Ok(Self {
            opponent: normal(opponent)?,
            won,
        })
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn probability(&self, x: f64) -> f64 {
        if self.won {
            self.opponent.cdf(x)
        } else {
            self.opponent.sf(x)
        }
    }
}

/// Build a `statrs` normal from a validated rating.
pub(crate) fn normal(rating: &Rating) -> Result<Normal, RatingError> {
    rating.validate()?;
    Normal::new(rating.mean, rating.std_dev()).map_err(|_| RatingError::InvalidVariance {
        variance: rating.variance,
    })
}
