use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::RigidBodyState;

/// Kite frame touching the ground plane this frame.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    /// Lowest frame point before the correction, world frame.
    pub impact_point: Vector3<f64>,
    /// Depth below the ground plane (m).
    pub penetration_depth: f64,
}

/// Keep the kite frame above a flat ground plane.
///
/// The lowest frame point under the current orientation is tested; if it is
/// below `ground_height` the kite is lifted by the penetration depth, any
/// downward velocity is removed and horizontal velocity is scaled by
/// `friction`.
pub fn resolve_ground_contact(
    state: &mut RigidBodyState,
    frame_points: &[Vector3<f64>],
    ground_height: f64,
    friction: f64,
) -> Option<GroundContact> {
    let impact_point = frame_points
        .iter()
        .map(|point| state.spatial.to_world(point))
        .chain(std::iter::once(state.position()))
        .min_by(|a, b| a.y.total_cmp(&b.y))?;

    let penetration_depth = ground_height - impact_point.y;
    if !(penetration_depth > 0.0) {
        return None;
    }

    state.spatial.position.y += penetration_depth;

    let velocity = &mut state.spatial.velocity;
    if velocity.y < 0.0 {
        velocity.y = 0.0;
    }
    velocity.x *= friction;
    velocity.z *= friction;

    Some(GroundContact {
        impact_point,
        penetration_depth,
    })
}
