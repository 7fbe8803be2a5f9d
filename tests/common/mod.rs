mod assertions;
mod fixtures;
mod helpers;

pub use assertions::{assert_lines_within_tolerance, assert_spatial_valid, assert_unit_quaternion};
pub use fixtures::*;
pub use helpers::*;
