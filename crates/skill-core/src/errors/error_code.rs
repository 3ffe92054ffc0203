//! SkillErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its human-readable message.
pub trait SkillErrorCode {
    /// Returns the error code string (e.g., "INVALID_VARIANCE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_VARIANCE: &str = "INVALID_VARIANCE";
pub const INVALID_MEAN: &str = "INVALID_MEAN";
pub const INVALID_GRID: &str = "INVALID_GRID";
pub const DEGENERATE_DENSITY: &str = "DEGENERATE_DENSITY";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SELECTION_ERROR: &str = "SELECTION_ERROR";
pub const UNKNOWN_ENTITY: &str = "UNKNOWN_ENTITY";
