mod ground;

pub use ground::{resolve_ground_contact, GroundContact};
