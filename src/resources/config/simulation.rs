use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{aerodynamics::AerodynamicsConfig, physics::IntegratorConfig, physics::PhysicsConfig};
use crate::components::{ControlBarConfig, KiteConfig, LineConfig};
use crate::resources::EnvironmentConfig;
use crate::utils::ConfigError;

/// Everything the engine needs, passed in explicitly at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub integrator: IntegratorConfig,
    pub environment: EnvironmentConfig,
    pub aerodynamics: AerodynamicsConfig,
    pub lines: LineConfig,
    pub control_bar: ControlBarConfig,
    pub kite: KiteConfig,
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Reject values the engine cannot run with.
    ///
    /// Out-of-range pilot inputs (bridle, bar target) are clamped at use and
    /// never fail here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::ValidationError(format!(
                    "{name} must be positive and finite, got {value}"
                )))
            }
        }

        positive("kite.mass", self.kite.mass)?;
        positive("kite.inertia", self.kite.inertia)?;
        positive("lines.length", self.lines.length)?;
        positive("lines.tolerance", self.lines.tolerance)?;
        positive("control_bar.width", self.control_bar.width)?;
        positive("control_bar.max_rotation", self.control_bar.max_rotation)?;
        positive("physics.max_timestep", self.physics.max_timestep)?;
        positive("environment.atmosphere.sea_level_density", self.environment.atmosphere.sea_level_density)?;

        if self.physics.substeps == 0 {
            return Err(ConfigError::ValidationError(
                "physics.substeps must be at least 1".to_string(),
            ));
        }
        if self.lines.solver_passes == 0 || self.lines.max_solver_passes < self.lines.solver_passes {
            return Err(ConfigError::ValidationError(format!(
                "lines.solver_passes ({}) must be in 1..=max_solver_passes ({})",
                self.lines.solver_passes, self.lines.max_solver_passes
            )));
        }
        if self.kite.geometry.surfaces.is_empty() {
            return Err(ConfigError::ValidationError(
                "kite.geometry needs at least one sail surface".to_string(),
            ));
        }
        Ok(())
    }
}
