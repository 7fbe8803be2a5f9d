use approx::assert_relative_eq;
use kiteflyer::{components::SpatialComponent, simulation::KiteSimulation};
use nalgebra::UnitQuaternion;

/// Assert that a spatial component's state is finite everywhere
#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert!(
        spatial.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        spatial.position
    );
    assert!(
        spatial.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        spatial.velocity
    );
    assert!(
        spatial.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity is not finite: {:?}",
        spatial.angular_velocity
    );
    assert_unit_quaternion(&spatial.attitude);
}

#[track_caller]
pub fn assert_unit_quaternion(attitude: &UnitQuaternion<f64>) {
    assert_relative_eq!(attitude.quaternion().norm(), 1.0, epsilon = 1e-9);
}

/// Assert neither line is stretched beyond rest length plus tolerance
#[track_caller]
pub fn assert_lines_within_tolerance(simulation: &KiteSimulation) {
    let tolerance = simulation.config().lines.tolerance;
    for (line, report) in simulation.lines().iter().zip(simulation.line_reports()) {
        assert!(
            report.distance <= line.rest_length + tolerance + 1e-9,
            "{:?} line at {:.4} m exceeds rest {:.4} m",
            line.side,
            report.distance,
            line.rest_length
        );
    }
}
