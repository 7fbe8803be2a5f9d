mod atmosphere;
mod wind;

pub use atmosphere::{AtmosphereConfig, AtmosphereType};
pub use wind::WindConfig;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub wind: WindConfig,
    pub atmosphere: AtmosphereConfig,
}

impl EnvironmentConfig {
    pub fn new(wind: WindConfig, atmosphere: AtmosphereConfig) -> Self {
        Self { wind, atmosphere }
    }

    pub fn with_wind(speed: f64, direction: f64, turbulence: f64) -> Self {
        Self {
            wind: WindConfig::new(speed, direction, turbulence),
            atmosphere: AtmosphereConfig::default(),
        }
    }

    pub fn calm() -> Self {
        Self::with_wind(0.0, 0.0, 0.0)
    }
}
