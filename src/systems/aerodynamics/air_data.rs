use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;
use crate::utils::clamp_magnitude;

/// Relative flow seen by the kite for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirData {
    /// Wind relative to the body, world frame (m/s).
    pub apparent_wind: Vector3<f64>,
    /// |apparent_wind| (m/s).
    pub airspeed: f64,
    /// Air density (kg/m³).
    pub density: f64,
    /// 0.5·ρ·V² (Pa).
    pub dynamic_pressure: f64,
    /// Ambient wind before subtracting body velocity (m/s).
    pub wind_velocity: Vector3<f64>,
}

impl Default for AirData {
    fn default() -> Self {
        Self {
            apparent_wind: Vector3::zeros(),
            airspeed: 0.0,
            density: 0.0,
            dynamic_pressure: 0.0,
            wind_velocity: Vector3::zeros(),
        }
    }
}

impl AirData {
    /// Apparent wind = wind − body velocity, limited to `max_apparent_wind`
    /// so outliers never reach the sail model.
    pub fn calculate(
        spatial: &SpatialComponent,
        wind: Vector3<f64>,
        density: f64,
        max_apparent_wind: f64,
    ) -> Self {
        let (apparent_wind, _) = clamp_magnitude(wind - spatial.velocity, max_apparent_wind);
        let airspeed = apparent_wind.norm();

        Self {
            apparent_wind,
            airspeed,
            density,
            dynamic_pressure: 0.5 * density * airspeed * airspeed,
            wind_velocity: wind,
        }
    }
}
