use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Component for storing spatial state of the kite.
///
/// The simulation writes this once per frame; the scene graph only reads it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position of the centre of mass in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in world frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Create a new spatial component at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Transform a body-local point into world space.
    #[inline]
    pub fn to_world(&self, local: &Vector3<f64>) -> Vector3<f64> {
        self.position + self.attitude * local
    }

    /// Velocity of a body-fixed point given its world-space lever arm from the centre of mass.
    #[inline]
    pub fn point_velocity(&self, lever_arm: &Vector3<f64>) -> Vector3<f64> {
        self.velocity + self.angular_velocity.cross(lever_arm)
    }

    /// Render-side transform; the scene graph works in single precision.
    pub fn to_transform(&self) -> Transform {
        let q = self.attitude.quaternion();
        Transform {
            translation: Vec3::new(
                self.position.x as f32,
                self.position.y as f32,
                self.position.z as f32,
            ),
            rotation: Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32),
            scale: Vec3::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_to_world() {
        let spatial = SpatialComponent::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::zeros(),
            UnitQuaternion::from_euler_angles(0.0, 0.0, PI / 2.0),
            Vector3::zeros(),
        );
        let world = spatial.to_world(&Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(world, Vector3::new(1.0, 3.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_point_velocity() {
        let spatial = SpatialComponent {
            velocity: Vector3::new(1.0, 0.0, 0.0),
            angular_velocity: Vector3::new(0.0, 0.0, 2.0),
            ..Default::default()
        };
        let v = spatial.point_velocity(&Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v, Vector3::new(1.0, 2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_transform_conversion() {
        let spatial = SpatialComponent::new(
            Vector3::new(0.0, 7.0, -14.25),
            Vector3::zeros(),
            UnitQuaternion::from_euler_angles(0.3, 0.0, 0.0),
            Vector3::zeros(),
        );
        let transform = spatial.to_transform();
        assert_relative_eq!(transform.translation.y, 7.0_f32);
        assert_relative_eq!(transform.translation.z, -14.25_f32);
        assert_relative_eq!(transform.rotation.length(), 1.0_f32, epsilon = 1e-6);
    }
}
