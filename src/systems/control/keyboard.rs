use bevy::prelude::*;

use crate::simulation::{KiteSimulation, PilotCommand};

/// Steer the bar with the arrow keys: held left/right pushes the target to
/// the rotation limit, releasing both recentres it.
///
/// The command is only written when the arrow-key state changes, so a
/// [`PilotCommand`] set by other code survives while the keys are idle.
/// Does nothing when no keyboard input is registered (headless runs).
pub fn keyboard_steering_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    simulation: Res<KiteSimulation>,
    mut command: ResMut<PilotCommand>,
    mut last_target: Local<f64>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    let limit = simulation.config().control_bar.max_rotation;
    let left = keyboard.pressed(KeyCode::ArrowLeft);
    let right = keyboard.pressed(KeyCode::ArrowRight);

    let target = match (left, right) {
        (true, false) => -limit,
        (false, true) => limit,
        _ => 0.0,
    };
    if target != *last_target {
        *last_target = target;
        command.target_rotation = target;
    }
}
