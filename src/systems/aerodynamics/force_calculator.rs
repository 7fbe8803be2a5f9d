use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::{BridleConfiguration, SailSurface};
use crate::resources::AerodynamicsConfig;
use crate::systems::aerodynamics::AirData;

// Incidence below this counts as flow along the panel.
const MIN_INCIDENCE: f64 = 1e-6;

/// Aerodynamic load on the kite for one frame, world frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroForces {
    /// Force component perpendicular to the apparent wind (N).
    pub lift: Vector3<f64>,
    /// Force component along the apparent wind (N).
    pub drag: Vector3<f64>,
    /// Torque about the centre of mass (N·m).
    pub torque: Vector3<f64>,
    /// Force-weighted mean of the loaded panel centres, world frame (m).
    pub center_of_pressure: Vector3<f64>,
    /// Area-weighted angle between the flow and the sail panels (rad).
    pub angle_of_attack: f64,
    pub dynamic_pressure: f64,
    pub airspeed: f64,
}

impl Default for AeroForces {
    fn default() -> Self {
        Self {
            lift: Vector3::zeros(),
            drag: Vector3::zeros(),
            torque: Vector3::zeros(),
            center_of_pressure: Vector3::zeros(),
            angle_of_attack: 0.0,
            dynamic_pressure: 0.0,
            airspeed: 0.0,
        }
    }
}

impl AeroForces {
    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.drag
    }

    pub fn is_zero(&self) -> bool {
        self.lift == Vector3::zeros() && self.drag == Vector3::zeros() && self.torque == Vector3::zeros()
    }
}

/// Flat-plate pressure model over the kite's sail panels.
///
/// Each panel pushes along its normal (turned to point downwind) with
/// magnitude `q · area · cos(incidence)`. The summed force is split into the
/// component along the flow (drag) and the remainder (lift), each rescaled by
/// the calibration coefficients.
///
/// # Arguments
/// * `surfaces` - Sail panels in body coordinates, centred on the centre of mass.
/// * `config` - Calibration coefficients and airspeed threshold.
/// * `air_data` - Apparent wind and dynamic pressure for this frame.
/// * `attitude` - Body to world rotation.
/// * `position` - Centre of mass, world frame.
/// * `bridle` - Bridle calibration; multiplies the incidence term.
///
/// # Returns
/// Zero forces when the apparent wind is below the threshold.
pub fn calculate_aerodynamic_forces(
    surfaces: &[SailSurface],
    config: &AerodynamicsConfig,
    air_data: &AirData,
    attitude: &UnitQuaternion<f64>,
    position: &Vector3<f64>,
    bridle: BridleConfiguration,
) -> AeroForces {
    if !(air_data.airspeed >= config.min_airspeed_threshold) {
        return AeroForces::default();
    }

    let wind_dir = air_data.apparent_wind / air_data.airspeed;
    let q_dyn = air_data.dynamic_pressure;
    // Re-clamp in case the caller built the bridle without going through the setter
    let bridle_factor = BridleConfiguration::new(bridle.factor()).factor();

    let mut total = Vector3::zeros();
    let mut torque = Vector3::zeros();
    let mut pressure_moment = Vector3::zeros();
    let mut pressure_weight = 0.0;
    let mut incidence_area = 0.0;
    let mut total_area = 0.0;

    for surface in surfaces {
        let world_normal = attitude * surface.local_normal();
        let facing = wind_dir.dot(&world_normal);
        let cos_incidence = facing.abs().max(0.0);
        total_area += surface.area;

        if cos_incidence < MIN_INCIDENCE {
            continue;
        }

        let effective_incidence = (cos_incidence * bridle_factor).min(1.0);
        let magnitude = q_dyn * surface.area * effective_incidence;
        let direction = if facing < 0.0 { -world_normal } else { world_normal };
        let force = direction * magnitude;

        let lever_arm = attitude * surface.centroid();
        torque += lever_arm.cross(&force);
        total += force;

        pressure_moment += (position + lever_arm) * magnitude;
        pressure_weight += magnitude;
        // |n·w| is the sine of the angle between the flow and the panel plane
        incidence_area += cos_incidence.min(1.0).asin() * surface.area;
    }

    let drag = wind_dir * total.dot(&wind_dir).max(0.0);
    let lift = total - drag;

    AeroForces {
        lift: lift * config.lift_scale,
        drag: drag * config.drag_scale,
        torque,
        center_of_pressure: if pressure_weight > 0.0 {
            pressure_moment / pressure_weight
        } else {
            *position
        },
        angle_of_attack: if total_area > 0.0 {
            incidence_area / total_area
        } else {
            0.0
        },
        dynamic_pressure: q_dyn,
        airspeed: air_data.airspeed,
    }
}

/// Sail model bound to one kite's panels and calibration.
#[derive(Debug, Clone)]
pub struct AerodynamicsModel {
    surfaces: Vec<SailSurface>,
    config: AerodynamicsConfig,
}

impl AerodynamicsModel {
    pub fn new(surfaces: Vec<SailSurface>, config: AerodynamicsConfig) -> Self {
        Self { surfaces, config }
    }

    pub fn config(&self) -> &AerodynamicsConfig {
        &self.config
    }

    pub fn surfaces(&self) -> &[SailSurface] {
        &self.surfaces
    }

    pub fn compute_forces(
        &self,
        air_data: &AirData,
        attitude: &UnitQuaternion<f64>,
        position: &Vector3<f64>,
        bridle: BridleConfiguration,
    ) -> AeroForces {
        calculate_aerodynamic_forces(
            &self.surfaces,
            &self.config,
            air_data,
            attitude,
            position,
            bridle,
        )
    }
}
