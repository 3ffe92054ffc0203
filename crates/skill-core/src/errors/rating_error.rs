//! Errors raised by the posterior construction and moment matching kernel.

use std::fmt;

use super::error_code::{self, SkillErrorCode};

/// Errors that can occur while building or reducing a posterior density.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid variance {variance}: must be finite and greater than 0")]
    InvalidVariance { variance: f64 },

    #[error("Invalid mean {mean}: must be finite")]
    InvalidMean { mean: f64 },

    #[error("Invalid integration grid: {message}")]
    InvalidGrid { message: String },

    #[error("Degenerate density: {0}")]
    DegenerateDensity(Degeneracy),
}

impl RatingError {
    /// Returns true for the `DegenerateDensity` family.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateDensity(_))
    }
}

impl SkillErrorCode for RatingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidVariance { .. } => error_code::INVALID_VARIANCE,
            Self::InvalidMean { .. } => error_code::INVALID_MEAN,
            Self::InvalidGrid { .. } => error_code::INVALID_GRID,
            Self::DegenerateDensity(_) => error_code::DEGENERATE_DENSITY,
        }
    }
}

/// Why a density could not be reduced to a usable rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Degeneracy {
    /// The normalizing integral over the domain was zero, negative or not finite.
    ZeroIntegral { integral: f64 },
    /// All mass sits on the mode, so the one-sided spread collapsed to zero.
    ZeroVariance { mode: f64, normalizer: f64 },
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIntegral { integral } => {
                write!(f, "normalizing integral is {integral}, no mass inside the domain")
            }
            Self::ZeroVariance { mode, .. } => {
                write!(f, "variance collapsed to zero around mode {mode}")
            }
        }
    }
}
