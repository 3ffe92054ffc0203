//! Bounded interval over which every density is defined and integrated.

use serde::{Deserialize, Serialize};

use crate::errors::RatingError;

pub const DEFAULT_MIN_VALUE: f64 = -500.0;
pub const DEFAULT_MAX_VALUE: f64 = 3000.0;

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Result<Self, RatingError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(RatingError::InvalidGrid {
                message: format!("domain [{min}, {max}] must be finite with min < max"),
            });
        }
        Ok(Self { min, max })
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, x: f64) -> bool {
        (self.min..=self.max).contains(&x)
    }

    /// The bound `x` lies within `margin` of, if any. The lower bound wins
    /// when the domain is narrower than twice the margin.
    pub fn edge_near(&self, x: f64, margin: f64) -> Option<DomainEdge> {
        if x - self.min <= margin {
            Some(DomainEdge::Lower)
        } else if self.max - x <= margin {
            Some(DomainEdge::Upper)
        } else {
            None
        }
    }
}

/// Which bound of the domain a value sits against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainEdge {
    Lower,
    Upper,
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_VALUE,
            max: DEFAULT_MAX_VALUE,
        }
    }
}
