use nalgebra::Vector3;

use crate::components::RigidBodyState;
use crate::systems::aerodynamics::AeroForces;

/// Net force and torque on the kite before line constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetLoads {
    pub force: Vector3<f64>,
    pub torque: Vector3<f64>,
}

/// Sum aerodynamic load and gravity into the world-frame net load.
///
/// Gravity acts at the centre of mass and adds no torque. Line tension is
/// not a force here; the line solver corrects the pose directly.
pub fn calculate_net_forces_moments(
    state: &RigidBodyState,
    aero: &AeroForces,
    gravity: f64,
) -> NetLoads {
    let gravity_force = Vector3::new(0.0, -state.mass * gravity, 0.0);

    NetLoads {
        force: aero.lift + aero.drag + gravity_force,
        torque: aero.torque,
    }
}
