//! Problem selection configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectionConfig {
    /// How many of the most recent history entries are excluded. Default: all.
    pub history_window: Option<usize>,
    /// Keep only problems within this many user standard deviations of the
    /// user mean, when any qualify. Default: no narrowing.
    pub max_gap_sigmas: Option<f64>,
}
