use nalgebra::{Unit, UnitQuaternion, Vector3};
use std::f64::consts::PI;

use super::constants::KMH_TO_MS;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Convert a speed in km/h to m/s
#[inline]
pub fn kmh_to_ms(kmh: f64) -> f64 {
    kmh * KMH_TO_MS
}

/// True when every component of the vector is finite.
#[inline]
pub fn is_finite_vector(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Scales `v` down so its magnitude does not exceed `max`.
///
/// Returns the limited vector and whether limiting was required.
pub fn clamp_magnitude(v: Vector3<f64>, max: f64) -> (Vector3<f64>, bool) {
    let norm = v.norm();
    if norm > max && norm > 0.0 {
        (v * (max / norm), true)
    } else {
        (v, false)
    }
}

/// Exponential map: converts an axis-angle vector to a unit quaternion.
///
/// Given `v = θ * n` (unit axis `n`, angle `θ`), returns the rotation by θ
/// radians about `n`. Tiny rotations collapse to identity.
pub fn exp_quat(v: &Vector3<f64>) -> UnitQuaternion<f64> {
    let theta = v.norm();
    if theta < 1e-12 {
        UnitQuaternion::identity()
    } else {
        UnitQuaternion::from_axis_angle(&Unit::new_normalize(*v), theta)
    }
}
