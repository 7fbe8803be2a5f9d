mod config;
mod wind_field;

pub use config::{AtmosphereConfig, AtmosphereType, EnvironmentConfig, WindConfig};
pub use wind_field::{WindField, WindSample};
