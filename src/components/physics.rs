use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;

/// Full rigid-body state of the kite.
///
/// Plain data: the pose lives in [`SpatialComponent`] so the render side can
/// poll it without seeing mass properties. Only the integrator and the line
/// solver mutate this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyState {
    pub spatial: SpatialComponent,
    /// Total mass (kg), > 0.
    pub mass: f64,
    /// Isotropic moment of inertia (kg·m²), > 0.
    pub inertia: f64,
}

impl RigidBodyState {
    pub fn new(spatial: SpatialComponent, mass: f64, inertia: f64) -> Self {
        Self {
            spatial,
            mass,
            inertia,
        }
    }

    #[inline]
    pub fn position(&self) -> Vector3<f64> {
        self.spatial.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector3<f64> {
        self.spatial.velocity
    }

    #[inline]
    pub fn attitude(&self) -> UnitQuaternion<f64> {
        self.spatial.attitude
    }

    #[inline]
    pub fn angular_velocity(&self) -> Vector3<f64> {
        self.spatial.angular_velocity
    }

    #[inline]
    pub fn inverse_mass(&self) -> f64 {
        1.0 / self.mass
    }

    #[inline]
    pub fn inverse_inertia(&self) -> f64 {
        1.0 / self.inertia
    }

    /// Effective inverse mass seen by a constraint acting along `normal` at
    /// `lever_arm` from the centre of mass: `1/m + |r × n|² / I`.
    pub fn effective_inverse_mass(&self, lever_arm: &Vector3<f64>, normal: &Vector3<f64>) -> f64 {
        self.inverse_mass() + lever_arm.cross(normal).norm_squared() * self.inverse_inertia()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.spatial.velocity.norm_squared()
            + 0.5 * self.inertia * self.spatial.angular_velocity.norm_squared()
    }
}
