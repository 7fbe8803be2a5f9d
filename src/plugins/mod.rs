mod physics;

pub use physics::{Kite, KitePhysicsPlugin, KitePhysicsSet, KitePhysicsTimestep, ResetKite};
