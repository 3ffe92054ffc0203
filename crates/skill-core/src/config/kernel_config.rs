//! Kernel configuration: domain bounds, grid step and orchestration knobs.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::domain::{DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE};
use crate::types::Domain;

/// Grid step for the mode and variance passes.
pub const DEFAULT_STEP: f64 = 5.0;
/// Distance from a domain bound within which a mode counts as clipped.
pub const DEFAULT_EDGE_MARGIN: f64 = 25.0;
/// Sampling step for diagnostic density curves.
pub const DEFAULT_CURVE_STEP: f64 = 10.0;
/// Upper bound on `width / step` for any grid the kernel tabulates.
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// Configuration for the posterior update kernel.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KernelConfig {
    /// Lower domain bound. Default: -500.
    pub min_value: Option<f64>,
    /// Upper domain bound. Default: 3000.
    pub max_value: Option<f64>,
    /// Grid step size. Smaller is more precise and proportionally slower. Default: 5.
    pub step: Option<f64>,
    /// Margin for the domain-edge advisory. Default: 25.
    pub edge_margin: Option<f64>,
    /// Evaluate user and problem sides on separate threads. Default: true.
    pub parallel: Option<bool>,
    /// Variance substituted when a side collapses to zero variance. Default: none.
    pub variance_floor: Option<f64>,
    /// Step for diagnostic curve sampling. Default: 10.
    pub curve_step: Option<f64>,
}

impl KernelConfig {
    pub fn effective_min_value(&self) -> f64 {
        self.min_value.unwrap_or(DEFAULT_MIN_VALUE)
    }

    pub fn effective_max_value(&self) -> f64 {
        self.max_value.unwrap_or(DEFAULT_MAX_VALUE)
    }

    pub fn effective_step(&self) -> f64 {
        self.step.unwrap_or(DEFAULT_STEP)
    }

    pub fn effective_edge_margin(&self) -> f64 {
        self.edge_margin.unwrap_or(DEFAULT_EDGE_MARGIN)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    pub fn effective_curve_step(&self) -> f64 {
        self.curve_step.unwrap_or(DEFAULT_CURVE_STEP)
    }

    /// Check that the resolved values describe a usable grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.effective_min_value(), self.effective_max_value());
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(invalid("kernel.min_value", "must be finite and below kernel.max_value"));
        }
        let step = self.effective_step();
        if !step.is_finite() || step <= 0.0 || step > max - min {
            return Err(invalid("kernel.step", "must be > 0 and no wider than the domain"));
        }
        if too_fine(max - min, step) {
            return Err(invalid("kernel.step", "must yield at most 10,000,000 grid points"));
        }
        let margin = self.effective_edge_margin();
        if !margin.is_finite() || margin < 0.0 {
            return Err(invalid("kernel.edge_margin", "must be >= 0"));
        }
        if let Some(floor) = self.variance_floor {
            if !floor.is_finite() || floor <= 0.0 {
                return Err(invalid("kernel.variance_floor", "must be > 0"));
            }
        }
        let curve_step = self.effective_curve_step();
        if !curve_step.is_finite() || curve_step <= 0.0 || curve_step > max - min {
            return Err(invalid("kernel.curve_step", "must be > 0 and no wider than the domain"));
        }
        if too_fine(max - min, curve_step) {
            return Err(invalid(
                "kernel.curve_step",
                "must yield at most 10,000,000 grid points",
            ));
        }
        Ok(())
    }

    /// Resolve into the concrete values the kernel consumes.
    pub fn settings(&self) -> Result<KernelSettings, ConfigError> {
        self.validate()?;
        Ok(KernelSettings {
            domain: Domain {
                min: self.effective_min_value(),
                max: self.effective_max_value(),
            },
            step: self.effective_step(),
            edge_margin: self.effective_edge_margin(),
            parallel: self.effective_parallel(),
            variance_floor: self.variance_floor,
            curve_step: self.effective_curve_step(),
        })
    }
}

/// True when a grid over `width` at `step` would exceed `MAX_GRID_POINTS`.
pub fn too_fine(width: f64, step: f64) -> bool {
    width / step > MAX_GRID_POINTS as f64
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Fully resolved kernel parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelSettings {
    pub domain: Domain,
    pub step: f64,
    pub edge_margin: f64,
    pub parallel: bool,
    pub variance_floor: Option<f64>,
    pub curve_step: f64,
}

impl Default for KernelSettings {
    fn default() -> Self {
        Self {
            domain: Domain::default(),
            step: DEFAULT_STEP,
            edge_margin: DEFAULT_EDGE_MARGIN,
            parallel: true,
            variance_floor: None,
            curve_step: DEFAULT_CURVE_STEP,
        }
    }
}
