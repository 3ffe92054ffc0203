//! Orchestration errors: a kernel failure tagged with the side that failed.

use super::error_code::SkillErrorCode;
use super::RatingError;
use crate::types::Side;

/// Failure of one side of a two-sided rating adjustment.
///
/// Both sides either succeed together or the call fails with the side
/// that could not be updated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Failed to update {side} rating: {source}")]
pub struct AdjustError {
    pub side: Side,
    #[source]
    pub source: RatingError,
}

impl AdjustError {
    pub fn new(side: Side, source: RatingError) -> Self {
        Self { side, source }
    }
}

impl SkillErrorCode for AdjustError {
    fn error_code(&self) -> &'static str {
        self.source.error_code()
    }
}
