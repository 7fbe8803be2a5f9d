pub mod config;
pub mod geometry;

pub use config::{BridleConfiguration, KiteConfig, StartConfig};
pub use geometry::{KiteGeometry, SailSurface, DELTA_FRAME_POINTS, DELTA_SAIL_PANELS};
