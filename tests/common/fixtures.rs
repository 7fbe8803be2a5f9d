use kiteflyer::{
    components::BridleConfiguration,
    resources::{EnvironmentConfig, SimulationConfig},
};

pub const FRAME_DT: f64 = 1.0 / 60.0;

/// 18 km/h from 0°, no turbulence, 15 m lines, bridle 1.0, kite 14.25 m
/// downwind at 7 m.
pub fn create_scenario_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.environment = EnvironmentConfig::with_wind(18.0, 0.0, 0.0);
    config.lines.length = 15.0;
    config.kite.bridle = BridleConfiguration::new(1.0);
    config.kite.start.downwind_distance = 14.25;
    config.kite.start.altitude = 7.0;
    config
}

/// No wind at all: only gravity, lines and ground act on the kite.
pub fn create_calm_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.environment = EnvironmentConfig::calm();
    config
}

/// Calm air with the kite well inside line reach so both lines are slack.
pub fn create_free_fall_config() -> SimulationConfig {
    let mut config = create_calm_config();
    config.kite.start.downwind_distance = 5.0;
    config.kite.start.altitude = 10.0;
    config
}

pub fn create_turbulent_config(turbulence: f64) -> SimulationConfig {
    let mut config = create_scenario_config();
    config.environment = EnvironmentConfig::with_wind(25.0, 0.0, turbulence);
    config
}
