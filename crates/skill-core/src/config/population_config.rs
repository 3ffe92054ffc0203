//! Population seeding configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_MEAN: f64 = 300.0;
pub const DEFAULT_USER_STD: f64 = 500.0;

/// Prior handed to users who have no history yet.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PopulationConfig {
    /// New-user prior mean. Default: 300.
    pub user_mean: Option<f64>,
    /// New-user prior standard deviation. Default: 500.
    pub user_std: Option<f64>,
}

impl PopulationConfig {
    pub fn effective_user_mean(&self) -> f64 {
        self.user_mean.unwrap_or(DEFAULT_USER_MEAN)
    }

    pub fn effective_user_std(&self) -> f64 {
        self.user_std.unwrap_or(DEFAULT_USER_STD)
    }
}
