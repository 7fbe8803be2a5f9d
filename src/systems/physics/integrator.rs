use bevy::log::warn;
use nalgebra::Vector3;

use crate::components::RigidBodyState;
use crate::resources::IntegratorConfig;
use crate::utils::{clamp_magnitude, exp_quat, is_finite_vector};

/// What the safeguards had to do during one integration step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegrationReport {
    pub force_discarded: bool,
    pub torque_discarded: bool,
    pub acceleration_clamped: bool,
    pub angular_acceleration_clamped: bool,
    pub velocity_clamped: bool,
    pub angular_velocity_clamped: bool,
    pub rolled_back: bool,
}

impl IntegrationReport {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Semi-implicit Euler integrator with fail-soft safeguards.
#[derive(Debug, Clone)]
pub struct RigidBodyIntegrator {
    config: IntegratorConfig,
}

impl RigidBodyIntegrator {
    pub fn new(config: IntegratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntegratorConfig {
        &self.config
    }

    /// Advance velocities and pose by `dt` under `net_force`/`net_torque`.
    ///
    /// The resulting position is a prediction: the line solver and ground
    /// contact correct it before the frame is committed.
    ///
    /// # Arguments
    /// * `state` - Rigid body to update in place.
    /// * `net_force` - World-frame net force (N).
    /// * `net_torque` - World-frame net torque about the centre of mass (N·m).
    /// * `dt` - Step duration (s).
    pub fn integrate(
        &self,
        state: &mut RigidBodyState,
        net_force: Vector3<f64>,
        net_torque: Vector3<f64>,
        dt: f64,
    ) -> IntegrationReport {
        let mut report = IntegrationReport::default();
        let cfg = &self.config;
        let previous = state.spatial;

        let force = sanitize(net_force, cfg.max_force, "force", &mut report.force_discarded);
        let torque = sanitize(net_torque, cfg.max_torque, "torque", &mut report.torque_discarded);

        // Linear
        let (acceleration, clamped) = clamp_magnitude(force / state.mass, cfg.max_acceleration);
        if clamped {
            warn!(
                "Acceleration {:.1} m/s² exceeds {:.1}, clamping",
                (force / state.mass).norm(),
                cfg.max_acceleration
            );
            report.acceleration_clamped = true;
        }

        let velocity = (state.spatial.velocity + acceleration * dt) * cfg.linear_damping;
        let (velocity, clamped) = clamp_magnitude(velocity, cfg.max_velocity);
        report.velocity_clamped = clamped;
        state.spatial.velocity = velocity;
        state.spatial.position += velocity * dt;

        // Angular, world frame
        let (angular_acceleration, clamped) =
            clamp_magnitude(torque / state.inertia, cfg.max_angular_acceleration);
        report.angular_acceleration_clamped = clamped;

        let angular_velocity =
            (state.spatial.angular_velocity + angular_acceleration * dt) * cfg.angular_damping;
        let (angular_velocity, clamped) = clamp_magnitude(angular_velocity, cfg.max_angular_velocity);
        report.angular_velocity_clamped = clamped;
        state.spatial.angular_velocity = angular_velocity;

        let mut attitude = exp_quat(&(angular_velocity * dt)) * state.spatial.attitude;
        attitude.renormalize();
        state.spatial.attitude = attitude;

        if !is_finite_vector(&state.spatial.position)
            || !state.spatial.attitude.coords.iter().all(|c| c.is_finite())
        {
            warn!("Non-finite pose after integration, rolling back to last valid state");
            state.spatial.position = previous.position;
            state.spatial.attitude = previous.attitude;
            state.spatial.velocity = Vector3::zeros();
            state.spatial.angular_velocity = Vector3::zeros();
            report.rolled_back = true;
        }

        report
    }
}

impl Default for RigidBodyIntegrator {
    fn default() -> Self {
        Self::new(IntegratorConfig::default())
    }
}

/// Zero a load that is non-finite or above its ceiling.
fn sanitize(load: Vector3<f64>, ceiling: f64, name: &str, discarded: &mut bool) -> Vector3<f64> {
    if !is_finite_vector(&load) {
        warn!("Non-finite {} {:?} discarded", name, load);
        *discarded = true;
        Vector3::zeros()
    } else if load.norm() > ceiling {
        warn!("{} magnitude {:.1} above ceiling {:.1} discarded", name, load.norm(), ceiling);
        *discarded = true;
        Vector3::zeros()
    } else {
        load
    }
}
