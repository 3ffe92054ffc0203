//! Error handling for the skill workspace.
//! One error enum per subsystem, `thiserror` only.

pub mod adjust_error;
pub mod config_error;
pub mod error_code;
pub mod ledger_error;
pub mod rating_error;
pub mod selection_error;

pub use adjust_error::AdjustError;
pub use config_error::ConfigError;
pub use error_code::SkillErrorCode;
pub use ledger_error::LedgerError;
pub use rating_error::{Degeneracy, RatingError};
pub use selection_error::SelectionError;
