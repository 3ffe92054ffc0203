//! Top-level configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{KernelConfig, PopulationConfig, SelectionConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SKILL_*`)
/// 3. Project config (`skill.toml` in project root)
/// 4. User config (`~/.skill/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SkillConfig {
    pub kernel: KernelConfig,
    pub population: PopulationConfig,
    pub selection: SelectionConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub kernel_step: Option<f64>,
    pub kernel_parallel: Option<bool>,
    pub kernel_variance_floor: Option<f64>,
    pub selection_history_window: Option<usize>,
}

impl SkillConfig {
    /// Load configuration with 4-layer resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("skill.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SkillConfig) -> Result<(), ConfigError> {
        config.kernel.validate()?;
        let std = config.population.effective_user_std();
        if !std.is_finite() || std <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "population.user_std".to_string(),
                message: "must be > 0".to_string(),
            });
        }
        if !config.population.effective_user_mean().is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "population.user_mean".to_string(),
                message: "must be finite".to_string(),
            });
        }
        if let Some(sigmas) = config.selection.max_gap_sigmas {
            if !sigmas.is_finite() || sigmas <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "selection.max_gap_sigmas".to_string(),
                    message: "must be > 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.skill/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".skill").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut SkillConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SkillConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `Some` values in `other` win.
    fn merge(base: &mut SkillConfig, other: &SkillConfig) {
        // Kernel
        let (b, o) = (&mut base.kernel, &other.kernel);
        if o.min_value.is_some() {
            b.min_value = o.min_value;
        }
        if o.max_value.is_some() {
            b.max_value = o.max_value;
        }
        if o.step.is_some() {
            b.step = o.step;
        }
        if o.edge_margin.is_some() {
            b.edge_margin = o.edge_margin;
        }
        if o.parallel.is_some() {
            b.parallel = o.parallel;
        }
        if o.variance_floor.is_some() {
            b.variance_floor = o.variance_floor;
        }
        if o.curve_step.is_some() {
            b.curve_step = o.curve_step;
        }

        // Population
        if other.population.user_mean.is_some() {
            base.population.user_mean = other.population.user_mean;
        }
        if other.population.user_std.is_some() {
            base.population.user_std = other.population.user_std;
        }

        // Selection
        if other.selection.history_window.is_some() {
            base.selection.history_window = other.selection.history_window;
        }
        if other.selection.max_gap_sigmas.is_some() {
            base.selection.max_gap_sigmas = other.selection.max_gap_sigmas;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SKILL_KERNEL_STEP`, `SKILL_POPULATION_USER_MEAN`, etc.
    fn apply_env_overrides(config: &mut SkillConfig) {
        if let Some(v) = env_parse::<f64>("SKILL_KERNEL_MIN_VALUE") {
            config.kernel.min_value = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SKILL_KERNEL_MAX_VALUE") {
            config.kernel.max_value = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SKILL_KERNEL_STEP") {
            config.kernel.step = Some(v);
        }
        if let Some(v) = env_parse::<bool>("SKILL_KERNEL_PARALLEL") {
            config.kernel.parallel = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SKILL_KERNEL_VARIANCE_FLOOR") {
            config.kernel.variance_floor = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SKILL_POPULATION_USER_MEAN") {
            config.population.user_mean = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SKILL_POPULATION_USER_STD") {
            config.population.user_std = Some(v);
        }
        if let Some(v) = env_parse::<usize>("SKILL_SELECTION_HISTORY_WINDOW") {
            config.selection.history_window = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SkillConfig, cli: &CliOverrides) {
        if let Some(v) = cli.kernel_step {
            config.kernel.step = Some(v);
        }
        if let Some(v) = cli.kernel_parallel {
            config.kernel.parallel = Some(v);
        }
        if let Some(v) = cli.kernel_variance_floor {
            config.kernel.variance_floor = Some(v);
        }
        if let Some(v) = cli.selection_history_window {
            config.selection.history_window = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse an env var; unparseable values are ignored.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
