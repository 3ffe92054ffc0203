//! Configuration system.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod kernel_config;
pub mod population_config;
pub mod selection_config;
pub mod skill_config;

pub use kernel_config::{KernelConfig, KernelSettings};
pub use population_config::PopulationConfig;
pub use selection_config::SelectionConfig;
pub use skill_config::{CliOverrides, SkillConfig};
