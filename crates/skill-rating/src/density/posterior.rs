//! Unnormalized posterior `p(x | outcome) ∝ P(outcome | x, opponent) · p(x)`.

use skill_core::errors::RatingError;
use skill_core::Rating;
use statrs::distribution::{Continuous, Normal};

use super::likelihood::{self, WinLikelihood};
use super::Density;

/// Posterior over one participant's latent value after a single outcome.
///
/// The opponent's distribution is held fixed; only the subject is updated.
#[derive(Debug, Clone)]
pub struct PosteriorDensity {
    prior: Normal,
    likelihood: WinLikelihood,
}

impl PosteriorDensity {
    /// Fails with `InvalidVariance` / `InvalidMean` when either rating breaks
    /// the rating invariants.
    pub fn build(
        subject_prior: &Rating,
        opponent: &Rating,
        subject_won: bool,
    ) -> Result<Self, RatingError> {
        let prior = likelihood::normal(subject_prior)?;
        let likelihood = WinLikelihood::new(opponent, subject_won)?;
        Ok(Self { prior, likelihood })
    }

    pub fn likelihood(&self) -> &WinLikelihood {
        &self.likelihood
    }
}

impl Density for PosteriorDensity {
    fn eval(&self, x: f64) -> f64 {
        self.likelihood.probability(x) * self.prior.pdf(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> Rating {
        Rating::from_std(300.0, 500.0).unwrap()
    }

    fn problem() -> Rating {
        Rating::from_std(700.0, 100.0).unwrap()
    }

    #[test]
    fn test_defined_and_non_negative_over_domain() {
        for won in [true, false] {
            let density = PosteriorDensity::build(&user(), &problem(), won).unwrap();
            let mut x = -500.0;
            while x <= 3000.0 {
                let y = density.eval(x);
                assert!(y.is_finite() && y >= 0.0, "x={x} y={y} won={won}");
                x += 1.0;
            }
        }
    }

    #[test]
    fn test_far_tails_underflow_to_zero_not_nan() {
        let narrow = Rating::from_std(1000.0, 1.0).unwrap();
        let density = PosteriorDensity::build(&narrow, &problem(), false).unwrap();
        let y = density.eval(-500.0);
        assert_eq!(y, 0.0);
        assert!(!density.eval(3000.0).is_nan());
    }

    #[test]
    fn test_winning_shifts_mass_upward() {
        let won = PosteriorDensity::build(&user(), &problem(), true).unwrap();
        let lost = PosteriorDensity::build(&user(), &problem(), false).unwrap();
        // Ratio won/lost is the odds cdf/sf, increasing in x.
        let r_low = won.eval(200.0) / lost.eval(200.0);
        let r_high = won.eval(900.0) / lost.eval(900.0);
        assert!(r_high > r_low);
    }

    #[test]
    fn test_invalid_subject_variance() {
        let bad = Rating {
            mean: 300.0,
            variance: -4.0,
        };
        assert_eq!(
            PosteriorDensity::build(&bad, &problem(), true).unwrap_err(),
            RatingError::InvalidVariance { variance: -4.0 }
        );
    }

    #[test]
    fn test_invalid_opponent_variance() {
        let bad = Rating {
            mean: 700.0,
            variance: 0.0,
        };
        assert!(PosteriorDensity::build(&user(), &bad, true).is_err());
    }
}
