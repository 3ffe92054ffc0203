//! Rating ledger errors.

use super::error_code::{self, SkillErrorCode};
use super::AdjustError;

/// Errors that can occur while applying an outcome to stored ratings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Unknown problem: {0}")]
    UnknownProblem(String),

    #[error("Adjustment error: {0}")]
    Adjust(#[from] AdjustError),
}

impl SkillErrorCode for LedgerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownUser(_) | Self::UnknownProblem(_) => error_code::UNKNOWN_ENTITY,
            Self::Adjust(e) => e.error_code(),
        }
    }
}
