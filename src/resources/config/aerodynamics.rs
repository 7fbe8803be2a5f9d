use serde::{Deserialize, Serialize};

use crate::utils::MIN_APPARENT_WIND_SPEED;

/// Calibration of the flat-plate sail model.
///
/// `lift_scale` and `drag_scale` are hand-tuned; they only reshape the
/// lift/drag split and carry no physical derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AerodynamicsConfig {
    pub lift_scale: f64,
    pub drag_scale: f64,
    /// Apparent wind below this produces no force (m/s).
    pub min_airspeed_threshold: f64,
    /// Apparent wind is limited to this magnitude before the sail model (m/s).
    pub max_apparent_wind: f64,
}

impl Default for AerodynamicsConfig {
    fn default() -> Self {
        Self {
            lift_scale: 1.2,
            drag_scale: 1.0,
            min_airspeed_threshold: MIN_APPARENT_WIND_SPEED,
            max_apparent_wind: 40.0,
        }
    }
}
