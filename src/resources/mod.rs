pub mod config;
mod environment;

pub use config::{AerodynamicsConfig, IntegratorConfig, PhysicsConfig, SimulationConfig};
pub use environment::{
    AtmosphereConfig, AtmosphereType, EnvironmentConfig, WindConfig, WindField, WindSample,
};
