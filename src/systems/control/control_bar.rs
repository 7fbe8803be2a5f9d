use nalgebra::{Unit, UnitQuaternion, Vector3};

use crate::components::{ControlBarConfig, ControlBarState};

// Below this the bar axis is degenerate and falls back to vertical.
const MIN_AXIS_LENGTH: f64 = 0.01;

/// Resolved handle positions and bar orientation for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePositions {
    pub left: Vector3<f64>,
    pub right: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
}

/// Place the two handles for a bar rotated by `rotation` about the axis
/// perpendicular to both the bar and the direction to the kite.
///
/// # Arguments
/// * `center` - Bar centre, world frame.
/// * `rotation` - Bar rotation (rad); positive pulls the right handle toward the kite.
/// * `width` - Handle separation (m).
/// * `left_attachment` - Left bridle point, world frame.
/// * `right_attachment` - Right bridle point, world frame.
pub fn compute_handle_positions(
    center: &Vector3<f64>,
    rotation: f64,
    width: f64,
    left_attachment: &Vector3<f64>,
    right_attachment: &Vector3<f64>,
) -> HandlePositions {
    let midpoint = 0.5 * (left_attachment + right_attachment);
    let axis = (midpoint - center)
        .try_normalize(f64::EPSILON)
        .map(|to_kite| Vector3::x().cross(&to_kite))
        .filter(|axis| axis.norm() >= MIN_AXIS_LENGTH)
        .map(Unit::new_normalize)
        .unwrap_or_else(Vector3::y_axis);

    let orientation = UnitQuaternion::from_axis_angle(&axis, rotation);
    let half = Vector3::new(0.5 * width, 0.0, 0.0);

    HandlePositions {
        left: center + orientation * -half,
        right: center + orientation * half,
        orientation,
    }
}

/// Move the bar rotation toward `target` at no more than the configured
/// rate, keeping both target and result within ±max_rotation.
pub fn update_rotation(state: &mut ControlBarState, target: f64, config: &ControlBarConfig, dt: f64) {
    let limit = config.max_rotation;
    if target.is_finite() {
        state.target_rotation = target.clamp(-limit, limit);
    }

    let max_step = config.rotation_rate * dt.max(0.0);
    let delta = (state.target_rotation - state.rotation).clamp(-max_step, max_step);
    state.rotation = (state.rotation + delta).clamp(-limit, limit);
}

/// Write the handles and orientation for the current rotation into `state`.
pub fn refresh_handles(
    state: &mut ControlBarState,
    config: &ControlBarConfig,
    left_attachment: &Vector3<f64>,
    right_attachment: &Vector3<f64>,
) {
    state.center = config.center();
    let handles = compute_handle_positions(
        &state.center,
        state.rotation,
        config.width,
        left_attachment,
        right_attachment,
    );
    state.left_handle = handles.left;
    state.right_handle = handles.right;
    state.orientation = handles.orientation;
}
