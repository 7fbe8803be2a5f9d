pub const GRAVITY: f64 = 9.81; // m/s^2
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225; // kg/m^3
pub const KMH_TO_MS: f64 = 1.0 / 3.6;

pub const MAX_TIMESTEP: f64 = 1.0 / 60.0; // Maximum physics timestep

// Bridle calibration range
pub const MIN_BRIDLE_FACTOR: f64 = 0.5;
pub const MAX_BRIDLE_FACTOR: f64 = 1.5;

// Below this apparent wind speed the sail produces no force
pub const MIN_APPARENT_WIND_SPEED: f64 = 0.01; // m/s

// Line solver
pub const LINE_TOLERANCE: f64 = 0.005; // m
pub const LINE_SOLVER_PASSES: usize = 2;
pub const LINE_SOLVER_MAX_PASSES: usize = 8;

// Flight analysis
pub const ANALYZER_HISTORY: usize = 120; // ~2 s at 60 Hz
pub const ANALYZER_WINDOW: usize = 60;
pub const TREND_WINDOW: usize = 20;
