use approx::assert_relative_eq;
use kiteflyer::components::BridleConfiguration;
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use crate::common::{
    assert_lines_within_tolerance, assert_spatial_valid, create_free_fall_config,
    create_scenario_config, create_simulation, run_frames, wait_for_condition, FRAME_DT,
};

#[test]
fn test_first_frame_flies_on_taut_lines() {
    let mut simulation = create_simulation(create_scenario_config());
    simulation.step(FRAME_DT, &0.0);

    for report in simulation.line_reports() {
        assert!(report.taut, "line should be taut: {:?}", report);
    }
    assert_lines_within_tolerance(&simulation);

    let aero = simulation.aerodynamics();
    assert!(aero.lift.norm() > 0.0, "expected lift, got {:?}", aero);
    assert!(aero.drag.norm() > 0.0, "expected drag, got {:?}", aero);
    // 18 km/h is 5 m/s toward -Z
    assert!(aero.drag.z < 0.0);
    assert_relative_eq!(simulation.wind().velocity.z, -5.0, epsilon = 1e-12);

    let altitude = simulation.state().position().y;
    assert!((altitude - 7.0).abs() < 0.1, "altitude drifted to {altitude}");
    assert_spatial_valid(simulation.spatial());
}

#[test]
fn test_lines_stay_inextensible() {
    let mut simulation = create_simulation(create_scenario_config());
    for _ in 0..300 {
        simulation.step(FRAME_DT, &0.0);
        assert_lines_within_tolerance(&simulation);
        assert_spatial_valid(simulation.spatial());
    }
}

#[test]
fn test_free_fall_with_slack_lines() {
    let mut simulation = create_simulation(create_free_fall_config());
    let start_altitude = simulation.state().position().y;

    simulation.step(FRAME_DT, &0.0);
    // No wind and no motion yet: the sail is unloaded
    assert!(simulation.aerodynamics().is_zero());
    assert!(simulation.line_reports().iter().all(|r| !r.taut && r.tension == 0.0));
    // Falling on gravity alone, slowed at most by damping
    let gravity = simulation.config().physics.gravity;
    let vy = simulation.state().velocity().y;
    assert!(vy < 0.0 && vy >= -gravity * FRAME_DT - 1e-12, "vy = {vy}");
    assert!(simulation.state().position().y < start_altitude);

    run_frames(&mut simulation, 20, &0.0);
    assert!(simulation.state().velocity().y < 0.0);
    assert!(simulation.state().position().y < start_altitude);
    assert!(simulation.line_reports().iter().all(|r| !r.taut));
}

#[test]
fn test_falling_kite_lands_on_ground() {
    let mut simulation = create_simulation(create_free_fall_config());
    let landed = wait_for_condition(&mut simulation, |s| s.ground_contact().is_some(), 600);
    assert!(landed, "kite never reached the ground");

    run_frames(&mut simulation, 60, &0.0);
    let spatial = simulation.spatial();
    let lowest = simulation
        .config()
        .kite
        .geometry
        .frame_points
        .iter()
        .map(|p| spatial.to_world(p).y)
        .fold(f64::INFINITY, f64::min);
    assert!(lowest >= -1e-9, "frame below ground: {lowest}");
    assert_spatial_valid(spatial);
}

#[test]
fn test_reset_is_idempotent() {
    let config = create_scenario_config();
    let fresh = create_simulation(config.clone());
    let mut simulation = create_simulation(config);

    run_frames(&mut simulation, 120, &0.4);
    simulation.reset();

    assert_eq!(*simulation.state(), *fresh.state());
    assert_eq!(*simulation.control_bar(), *fresh.control_bar());
    assert_eq!(simulation.elapsed(), 0.0);

    simulation.reset();
    assert_eq!(*simulation.state(), *fresh.state());

    // Same inputs from the same start give the same trajectory
    let mut replay = fresh.clone();
    run_frames(&mut simulation, 60, &0.1);
    run_frames(&mut replay, 60, &0.1);
    assert_eq!(*simulation.state(), *replay.state());
}

#[test]
fn test_reset_keeps_pilot_settings() {
    let mut simulation = create_simulation(create_scenario_config());
    simulation.set_line_length(20.0);
    simulation.set_bridle_factor(1.2);
    simulation.set_paused(true);

    simulation.reset();

    assert!(simulation.lines().iter().all(|l| l.rest_length == 20.0));
    assert_relative_eq!(simulation.bridle().factor(), 1.2);
    assert!(simulation.is_paused());
}

#[test]
fn test_symmetric_kite_flies_straight() {
    let mut simulation = create_simulation(create_scenario_config());
    simulation.step(FRAME_DT, &0.0);
    assert_relative_eq!(simulation.aerodynamics().torque.y, 0.0, epsilon = 1e-9);

    for frame in 1..600 {
        simulation.step(FRAME_DT, &0.0);
        let x = simulation.state().position().x;
        let heading = simulation.state().attitude() * Vector3::z();
        assert!(x.abs() < 1e-6, "kite drifted sideways to x = {x} at frame {frame}");
        assert!(heading.x.abs() < 1e-6, "kite yawed to {heading:?} at frame {frame}");
    }
}

#[test]
fn test_kite_holds_altitude_at_18_kmh() {
    let mut simulation = create_simulation(create_scenario_config());
    run_frames(&mut simulation, 60, &0.0);

    let mut lowest = f64::INFINITY;
    for _ in 60..600 {
        simulation.step(FRAME_DT, &0.0);
        assert!(simulation.ground_contact().is_none(), "kite landed at t = {:.2}", simulation.elapsed());
        lowest = lowest.min(simulation.state().position().y);
    }

    assert!(lowest > 3.0, "kite sank to {lowest} m");
    assert!(simulation.state().position().y > 5.0);
    assert!(simulation.line_reports().iter().all(|r| r.taut));
    assert_lines_within_tolerance(&simulation);
}

#[test]
fn test_kite_flies_across_bridle_range() {
    for factor in [0.5, 1.0, 1.5] {
        let mut config = create_scenario_config();
        config.kite.bridle = BridleConfiguration::new(factor);
        let mut simulation = create_simulation(config);
        run_frames(&mut simulation, 60, &0.0);

        for _ in 60..600 {
            simulation.step(FRAME_DT, &0.0);
            let altitude = simulation.state().position().y;
            assert!(altitude > 3.0, "bridle {factor}: kite sank to {altitude} m");
        }
        assert_spatial_valid(simulation.spatial());
    }
}

#[test]
fn test_steering_changes_trajectory() {
    let mut straight = create_simulation(create_scenario_config());
    let mut steered = straight.clone();

    run_frames(&mut straight, 60, &0.0);
    run_frames(&mut steered, 60, &0.4);

    let bar = steered.control_bar();
    assert_relative_eq!(bar.rotation, 0.4, epsilon = 1e-12);
    let offset = (steered.state().position() - straight.state().position()).norm();
    assert!(offset > 1e-4, "steering had no effect");
}
