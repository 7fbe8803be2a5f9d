use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Where the engine reads the pilot's steering from.
///
/// The returned target is clamped to the bar's rotation limit by the
/// engine, so implementations can pass raw device values through.
pub trait PilotInput {
    /// Desired bar rotation (rad), positive steers right.
    fn target_rotation(&self) -> f64;
}

impl PilotInput for f64 {
    fn target_rotation(&self) -> f64 {
        *self
    }
}

/// Latest steering request, written by input systems or an external driver.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PilotCommand {
    pub target_rotation: f64,
}

impl PilotCommand {
    pub fn new(target_rotation: f64) -> Self {
        Self { target_rotation }
    }
}

impl PilotInput for PilotCommand {
    fn target_rotation(&self) -> f64 {
        self.target_rotation
    }
}
