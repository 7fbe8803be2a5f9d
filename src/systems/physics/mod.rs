mod force_calculator;
mod integrator;

pub use force_calculator::{calculate_net_forces_moments, NetLoads};
pub use integrator::{IntegrationReport, RigidBodyIntegrator};
