pub mod aerodynamics;
pub mod physics;
pub mod simulation;

pub use aerodynamics::AerodynamicsConfig;
pub use physics::{IntegratorConfig, PhysicsConfig};
pub use simulation::SimulationConfig;
