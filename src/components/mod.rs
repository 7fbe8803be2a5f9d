pub mod control_bar;
pub mod kite;
pub mod line;
pub mod physics;
pub mod spatial;

pub use control_bar::{ControlBarConfig, ControlBarState};
pub use kite::{BridleConfiguration, KiteConfig, KiteGeometry, SailSurface, StartConfig};
pub use line::{LineConfig, LineConstraint, LineReport, LineSide};
pub use physics::RigidBodyState;
pub use spatial::SpatialComponent;
