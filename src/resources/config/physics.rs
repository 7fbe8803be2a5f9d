use serde::{Deserialize, Serialize};

use crate::utils::{GRAVITY, MAX_TIMESTEP};

/// Frame stepping and world parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Largest step integrated per frame; longer frames are truncated (s).
    pub max_timestep: f64,
    /// Sub-steps each (clamped) frame is split into.
    pub substeps: u32,
    /// Gravitational acceleration magnitude (m/s²).
    pub gravity: f64,
    /// Height of the ground plane (m).
    pub ground_height: f64,
    /// Horizontal velocity factor applied while in ground contact.
    pub ground_friction: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_timestep: MAX_TIMESTEP,
            substeps: 1,
            gravity: GRAVITY,
            ground_height: 0.0,
            ground_friction: 0.85,
        }
    }
}

/// Safeguards applied by the rigid-body integrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegratorConfig {
    /// Net force ceiling; larger inputs are discarded (N).
    pub max_force: f64,
    /// Net torque ceiling; larger inputs are discarded (N·m).
    pub max_torque: f64,
    pub max_acceleration: f64,         // m/s²
    pub max_velocity: f64,             // m/s
    pub max_angular_acceleration: f64, // rad/s²
    pub max_angular_velocity: f64,     // rad/s
    /// Per-step velocity multiplier standing in for unmodelled air drag.
    pub linear_damping: f64,
    /// Per-step angular velocity multiplier.
    pub angular_damping: f64,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            max_force: 1000.0,
            max_torque: 100.0,
            max_acceleration: 50.0,
            max_velocity: 30.0,
            max_angular_acceleration: 200.0,
            max_angular_velocity: 20.0,
            linear_damping: 0.99,
            angular_damping: 0.95,
        }
    }
}
