mod control_bar;
mod keyboard;

pub use control_bar::{compute_handle_positions, refresh_handles, update_rotation, HandlePositions};
pub use keyboard::keyboard_steering_system;
