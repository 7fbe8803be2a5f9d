use serde::{Deserialize, Serialize};

use crate::utils::SEA_LEVEL_AIR_DENSITY;

/// Scale height of the isothermal density approximation (m).
const DENSITY_SCALE_HEIGHT: f64 = 8500.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    pub sea_level_density: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AtmosphereType {
    Constant,
    Standard,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::Constant,
            sea_level_density: SEA_LEVEL_AIR_DENSITY,
        }
    }
}

impl AtmosphereConfig {
    /// Air density (kg/m³) at `altitude` metres.
    pub fn density(&self, altitude: f64) -> f64 {
        match self.model_type {
            AtmosphereType::Constant => self.sea_level_density,
            AtmosphereType::Standard => {
                self.sea_level_density * (-altitude.max(0.0) / DENSITY_SCALE_HEIGHT).exp()
            }
        }
    }
}
