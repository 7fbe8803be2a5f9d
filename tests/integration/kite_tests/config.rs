use kiteflyer::{
    resources::SimulationConfig,
    simulation::KiteSimulation,
    utils::ConfigError,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::common::{create_scenario_config, create_simulation, run_frames};

#[test]
fn test_config_file_round_trip_drives_same_flight() {
    let config = create_scenario_config();
    let file = NamedTempFile::new().unwrap();
    config.save(file.path()).unwrap();

    let loaded = SimulationConfig::load(file.path()).unwrap();
    let mut from_file = create_simulation(loaded);
    let mut direct = create_simulation(config);

    run_frames(&mut from_file, 30, &0.2);
    run_frames(&mut direct, 30, &0.2);
    assert_eq!(*from_file.state(), *direct.state());
}

#[test]
fn test_bridle_clamped_when_loaded() {
    let mut config = create_scenario_config();
    let file = NamedTempFile::new().unwrap();
    config.save(file.path()).unwrap();

    let yaml = std::fs::read_to_string(file.path()).unwrap();
    let yaml = yaml.replace("bridle: 1.0", "bridle: 2.0");
    std::fs::write(file.path(), yaml).unwrap();

    config = SimulationConfig::load(file.path()).unwrap();
    assert_eq!(config.kite.bridle.factor(), 1.5);
}

#[test]
fn test_bridle_clamped_at_runtime() {
    let mut simulation = create_simulation(create_scenario_config());
    simulation.set_bridle_factor(2.0);
    assert_eq!(simulation.bridle().factor(), 1.5);
    simulation.set_bridle_factor(0.1);
    assert_eq!(simulation.bridle().factor(), 0.5);
    simulation.set_bridle_factor(f64::NAN);
    assert_eq!(simulation.bridle().factor(), 0.5);
}

#[test]
fn test_malformed_yaml_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "physics: [not, a, map").unwrap();
    assert!(matches!(
        SimulationConfig::load(file.path()),
        Err(ConfigError::YamlError(_))
    ));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        SimulationConfig::load(dir.path().join("missing.yaml")),
        Err(ConfigError::FileError(_))
    ));
}

#[test]
fn test_invalid_values_rejected_at_construction() {
    let mut config = create_scenario_config();
    config.lines.length = 0.0;
    assert!(matches!(
        KiteSimulation::new(config),
        Err(ConfigError::ValidationError(_))
    ));

    let mut config = create_scenario_config();
    config.physics.substeps = 0;
    assert!(matches!(
        KiteSimulation::new(config),
        Err(ConfigError::ValidationError(_))
    ));
}
