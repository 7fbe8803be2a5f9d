use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::kite::KiteGeometry;
use crate::utils::{MAX_BRIDLE_FACTOR, MIN_BRIDLE_FACTOR};

/// Bridle calibration knob biasing the kite's presentation to the wind.
///
/// Always held inside [0.5, 1.5]; out-of-range requests are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct BridleConfiguration {
    factor: f64,
}

impl BridleConfiguration {
    pub fn new(factor: f64) -> Self {
        let mut bridle = Self { factor: 1.0 };
        bridle.set_factor(factor);
        bridle
    }

    pub fn set_factor(&mut self, factor: f64) {
        // NaN keeps the previous value
        if factor.is_nan() {
            return;
        }
        self.factor = factor.clamp(MIN_BRIDLE_FACTOR, MAX_BRIDLE_FACTOR);
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Default for BridleConfiguration {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

impl From<f64> for BridleConfiguration {
    fn from(factor: f64) -> Self {
        Self::new(factor)
    }
}

impl From<BridleConfiguration> for f64 {
    fn from(bridle: BridleConfiguration) -> Self {
        bridle.factor
    }
}

/// Starting pose used on construction and on every reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartConfig {
    /// Horizontal distance downwind of the pilot (m).
    pub downwind_distance: f64,
    /// Altitude of the centre of mass (m).
    pub altitude: f64,
    /// Initial attitude, body to world.
    pub attitude: UnitQuaternion<f64>,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            downwind_distance: 14.25,
            altitude: 7.0,
            attitude: UnitQuaternion::identity(),
        }
    }
}

impl StartConfig {
    /// Start position for a wind heading `direction_deg`, pilot at `pilot`.
    ///
    /// Direction 0° blows toward -Z, so "downwind" is along the wind vector.
    pub fn position(&self, pilot: &Vector3<f64>, direction_deg: f64) -> Vector3<f64> {
        let heading = direction_deg.to_radians();
        Vector3::new(
            pilot.x - self.downwind_distance * heading.sin(),
            self.altitude,
            pilot.z - self.downwind_distance * heading.cos(),
        )
    }

    /// Start attitude turned to face the wind heading.
    pub fn oriented_attitude(&self, direction_deg: f64) -> UnitQuaternion<f64> {
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), direction_deg.to_radians());
        yaw * self.attitude
    }
}

/// Mass properties and geometry of the kite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KiteConfig {
    /// Total mass (kg).
    pub mass: f64,
    /// Isotropic moment of inertia (kg·m²).
    pub inertia: f64,
    pub geometry: KiteGeometry,
    pub bridle: BridleConfiguration,
    pub start: StartConfig,
}

impl Default for KiteConfig {
    fn default() -> Self {
        Self {
            mass: 0.2,
            inertia: 0.053,
            geometry: KiteGeometry::delta(),
            bridle: BridleConfiguration::default(),
            start: StartConfig::default(),
        }
    }
}
