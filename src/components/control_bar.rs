use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Geometry and steering limits of the pilot's control bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlBarConfig {
    /// Pilot position on the ground (m).
    pub pilot_position: Vector3<f64>,
    /// Bar centre relative to the pilot (m).
    pub bar_offset: Vector3<f64>,
    /// Distance between the two handles (m).
    pub width: f64,
    /// Maximum bar rotation either way (rad).
    pub max_rotation: f64,
    /// Maximum rate the bar follows its target (rad/s).
    pub rotation_rate: f64,
}

impl Default for ControlBarConfig {
    fn default() -> Self {
        Self {
            pilot_position: Vector3::zeros(),
            bar_offset: Vector3::new(0.0, 1.3, 0.0),
            width: 0.6,
            max_rotation: PI / 6.0,
            rotation_rate: 2.0,
        }
    }
}

impl ControlBarConfig {
    pub fn center(&self) -> Vector3<f64> {
        self.pilot_position + self.bar_offset
    }
}

/// Current bar rotation plus the handle positions resolved for it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlBarState {
    /// Current rotation (rad), within ±max_rotation.
    pub rotation: f64,
    /// Rotation the bar is moving toward (rad).
    pub target_rotation: f64,
    pub center: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub left_handle: Vector3<f64>,
    pub right_handle: Vector3<f64>,
}

impl ControlBarState {
    pub fn new(config: &ControlBarConfig) -> Self {
        let center = config.center();
        let half = 0.5 * config.width;
        Self {
            rotation: 0.0,
            target_rotation: 0.0,
            center,
            orientation: UnitQuaternion::identity(),
            left_handle: center - Vector3::new(half, 0.0, 0.0),
            right_handle: center + Vector3::new(half, 0.0, 0.0),
        }
    }

    pub fn handles(&self) -> [Vector3<f64>; 2] {
        [self.left_handle, self.right_handle]
    }
}
