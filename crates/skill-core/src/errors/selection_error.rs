//! Problem selection errors.

use super::error_code::{self, SkillErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Problem pool is empty")]
    EmptyPool,
}

impl SkillErrorCode for SelectionError {
    fn error_code(&self) -> &'static str {
        error_code::SELECTION_ERROR
    }
}
