pub mod aerodynamics;
pub mod analysis;
pub mod collisions;
pub mod constraints;
pub mod control;
pub mod physics;
