mod input;
mod kite_simulation;

pub use input::{PilotCommand, PilotInput};
pub use kite_simulation::KiteSimulation;
