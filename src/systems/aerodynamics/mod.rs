mod air_data;
mod force_calculator;

pub use air_data::AirData;
pub use force_calculator::{calculate_aerodynamic_forces, AeroForces, AerodynamicsModel};
