//! Initial ratings for new users and for problems with expert-assigned
//! difficulty bands.

use serde::{Deserialize, Serialize};
use skill_core::config::PopulationConfig;
use skill_core::errors::RatingError;
use skill_core::Rating;

/// Expert-provided difficulty range `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyBand {
    pub low: f64,
    pub high: f64,
}

impl DifficultyBand {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Gaussian with roughly 85% of its mass inside the band.
    pub fn prior(&self) -> Result<Rating, RatingError> {
        Rating::from_range(self.low, self.high)
    }
}

const LADDER: [DifficultyBand; 9] = [
    DifficultyBand::new(0.0, 300.0),
    DifficultyBand::new(300.0, 600.0),
    DifficultyBand::new(600.0, 800.0),
    DifficultyBand::new(800.0, 1000.0),
    DifficultyBand::new(1000.0, 1200.0),
    DifficultyBand::new(1200.0, 1400.0),
    DifficultyBand::new(1400.0, 1600.0),
    DifficultyBand::new(1600.0, 1800.0),
    DifficultyBand::new(1800.0, 2000.0),
];

/// The default difficulty ladder, easiest first.
pub fn problem_ladder() -> &'static [DifficultyBand] {
    &LADDER
}

/// One prior per band, in band order.
pub fn seed_problems(bands: &[DifficultyBand]) -> Result<Vec<Rating>, RatingError> {
    bands.iter().map(DifficultyBand::prior).collect()
}

/// Flat prior for a user with no history.
pub fn new_user(config: &PopulationConfig) -> Result<Rating, RatingError> {
    Rating::from_std(config.effective_user_mean(), config.effective_user_std())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_priors() {
        let problems = seed_problems(problem_ladder()).unwrap();
        assert_eq!(problems.len(), 9);
        assert_eq!(problems[0].mean, 150.0);
        assert!((problems[0].std_dev() - 100.0).abs() < 1e-9);
        assert_eq!(problems[8].mean, 1900.0);
        assert!(problems.windows(2).all(|w| w[0].mean < w[1].mean));
    }

    #[test]
    fn test_band_prior_covers_most_of_band() {
        use statrs::distribution::{ContinuousCDF, Normal};
        let band = DifficultyBand::new(600.0, 800.0);
        let prior = band.prior().unwrap();
        let normal = Normal::new(prior.mean, prior.std_dev()).unwrap();
        let inside = normal.cdf(800.0) - normal.cdf(600.0);
        assert!(inside > 0.85 && inside < 0.88, "inside={inside}");
    }

    #[test]
    fn test_degenerate_band_rejected() {
        assert!(seed_problems(&[DifficultyBand::new(100.0, 100.0)]).is_err());
    }

    #[test]
    fn test_default_new_user() {
        let user = new_user(&PopulationConfig::default()).unwrap();
        assert_eq!(user.mean, 300.0);
        assert_eq!(user.variance, 250_000.0);
    }

    #[test]
    fn test_configured_new_user() {
        let config = PopulationConfig {
            user_mean: Some(1200.0),
            user_std: Some(350.0),
        };
        let user = new_user(&config).unwrap();
        assert_eq!(user.mean, 1200.0);
        assert!((user.std_dev() - 350.0).abs() < 1e-9);
    }
}
