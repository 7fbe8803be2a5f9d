use approx::assert_relative_eq;

use crate::common::{
    assert_spatial_valid, assert_unit_quaternion, create_scenario_config, create_simulation,
    create_turbulent_config, run_and_record, run_frames, FRAME_DT,
};

#[test]
fn test_quaternion_norm_over_long_flight() {
    let mut simulation = create_simulation(create_turbulent_config(60.0));
    for frame in 0..1200 {
        // Sweep the bar back and forth
        let steer = if (frame / 90) % 2 == 0 { 0.5 } else { -0.5 };
        simulation.step(FRAME_DT, &steer);
        assert_unit_quaternion(&simulation.state().attitude());
    }
    assert_spatial_valid(simulation.spatial());
}

#[test]
fn test_storm_wind_stays_finite() {
    let mut config = create_turbulent_config(100.0);
    config.environment.wind.speed = 120.0;
    let mut simulation = create_simulation(config);

    for _ in 0..600 {
        simulation.step(FRAME_DT, &0.0);
        assert_spatial_valid(simulation.spatial());
        assert!(simulation.air_data().airspeed <= simulation.config().aerodynamics.max_apparent_wind + 1e-9);
    }
}

#[test]
fn test_large_frame_is_truncated() {
    let mut simulation = create_simulation(create_scenario_config());
    simulation.step(0.5, &0.0);
    assert_relative_eq!(simulation.elapsed(), simulation.config().physics.max_timestep, epsilon = 1e-12);
}

#[test]
fn test_analyzer_sees_flight() {
    let mut simulation = create_simulation(create_scenario_config());
    run_frames(&mut simulation, 30, &0.0);
    let analyzer = run_and_record(&mut simulation, 150, &0.0);

    let summary = analyzer.summary();
    assert_eq!(summary.samples, 120);
    assert!(summary.oscillation.sufficient_data);
    assert!(summary.trends.sufficient_data);
    assert!((0.0..=1.0).contains(&summary.oscillation.stability));
}
