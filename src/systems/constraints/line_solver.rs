use bevy::log::{debug, warn};
use nalgebra::Vector3;

use crate::components::{LineConfig, LineConstraint, LineReport, RigidBodyState};
use crate::utils::exp_quat;

// Lines shorter than this have no usable direction.
const MIN_LINE_DISTANCE: f64 = 1e-9;

/// Position-based solver keeping both flying lines inextensible.
///
/// Lines are treated as rigid distance limits on the bridle points rather
/// than springs: each pass projects the kite's pose back onto the line
/// sphere, then any velocity still heading outward along a line is removed.
#[derive(Debug, Clone)]
pub struct LineConstraintSolver {
    config: LineConfig,
}

/// Per-line accumulator over one solve.
#[derive(Debug, Clone, Copy, Default)]
struct LineAccumulator {
    lambda: f64,
    impulse: f64,
}

impl LineConstraintSolver {
    pub fn new(config: LineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LineConfig {
        &self.config
    }

    pub fn set_rest_length(&mut self, length: f64) {
        self.config.length = length;
    }

    /// Project `state` so neither line exceeds its rest length.
    ///
    /// Each pass evaluates both lines against the same pose and applies the
    /// average of their corrections, so the result does not depend on which
    /// side is listed first. At least `solver_passes` passes run, with more up
    /// to `max_solver_passes` while a line is still longer than
    /// `rest + tolerance`. The velocity pass is repeated as many times as the
    /// position pass. Slack lines are left alone.
    ///
    /// # Arguments
    /// * `state` - Predicted kite state, corrected in place.
    /// * `lines` - Both lines with this frame's handle positions.
    /// * `dt` - Frame step, used to turn corrections into a tension estimate.
    pub fn solve(
        &self,
        state: &mut RigidBodyState,
        lines: &[LineConstraint; 2],
        dt: f64,
    ) -> [LineReport; 2] {
        let tolerance = self.config.tolerance;
        let min_passes = self.config.solver_passes.max(1);
        let max_passes = self.config.max_solver_passes.max(min_passes);
        let mut acc = [LineAccumulator::default(); 2];

        let mut passes = 0;
        while passes < max_passes {
            let lambdas = project_lines(state, lines, tolerance);
            for (a, lambda) in acc.iter_mut().zip(lambdas) {
                a.lambda += lambda;
            }
            passes += 1;

            if passes >= min_passes
                && lines
                    .iter()
                    .all(|line| line_distance(state, line) <= line.rest_length + tolerance)
            {
                break;
            }
        }

        for _ in 0..passes {
            let impulses = remove_radial_velocity(state, lines, tolerance);
            for (a, impulse) in acc.iter_mut().zip(impulses) {
                a.impulse += impulse;
            }
        }

        let mut reports = [LineReport::default(); 2];
        for ((report, line), a) in reports.iter_mut().zip(lines).zip(acc) {
            let distance = line_distance(state, line);
            let tension = if dt > 0.0 {
                (a.lambda / (dt * dt) + a.impulse / dt).max(0.0)
            } else {
                0.0
            };

            if tension > self.config.break_tension {
                warn!(
                    "{:?} line tension {:.1} N exceeds break threshold {:.1} N",
                    line.side, tension, self.config.break_tension
                );
            }

            *report = LineReport {
                distance,
                taut: distance > line.rest_length - tolerance,
                tension,
            };
        }

        debug!(
            "Line solve: {} passes, distances {:.4}/{:.4}",
            passes, reports[0].distance, reports[1].distance
        );

        reports
    }
}

impl Default for LineConstraintSolver {
    fn default() -> Self {
        Self::new(LineConfig::default())
    }
}

fn line_distance(state: &RigidBodyState, line: &LineConstraint) -> f64 {
    (state.spatial.to_world(&line.attachment) - line.handle).norm()
}

/// Geometry of an engaged line: world lever arm, unit direction handle to
/// attachment, and distance.
fn engaged_line(
    state: &RigidBodyState,
    line: &LineConstraint,
    tolerance: f64,
) -> Option<(Vector3<f64>, Vector3<f64>, f64)> {
    let lever_arm = state.attitude() * line.attachment;
    let diff = state.position() + lever_arm - line.handle;
    let distance = diff.norm();

    if distance <= line.rest_length - tolerance || distance < MIN_LINE_DISTANCE {
        return None;
    }
    Some((lever_arm, diff / distance, distance))
}

/// Share of a correction each active line gets.
fn share<T>(rows: &[Option<T>; 2]) -> f64 {
    match rows.iter().filter(|row| row.is_some()).count() {
        0 => 0.0,
        n => 1.0 / n as f64,
    }
}

/// One positional pass over both lines. Returns the multipliers applied.
fn project_lines(
    state: &mut RigidBodyState,
    lines: &[LineConstraint; 2],
    tolerance: f64,
) -> [f64; 2] {
    let rows = lines.each_ref().map(|line| {
        let (lever_arm, normal, distance) = engaged_line(state, line, tolerance)?;
        let violation = distance - line.rest_length;
        let lambda = violation / state.effective_inverse_mass(&lever_arm, &normal);
        Some((lever_arm.cross(&normal), normal, lambda))
    });
    let weight = share(&rows);

    let mut translation = Vector3::<f64>::zeros();
    let mut rotation = Vector3::<f64>::zeros();
    let applied = rows.map(|row| {
        let Some((angular, normal, lambda)) = row else {
            return 0.0;
        };
        let lambda = lambda * weight;
        translation -= normal * lambda;
        rotation -= angular * lambda;
        lambda
    });

    if weight > 0.0 {
        state.spatial.position += translation * state.inverse_mass();
        let mut attitude = exp_quat(&(rotation * state.inverse_inertia())) * state.spatial.attitude;
        attitude.renormalize();
        state.spatial.attitude = attitude;
    }

    applied
}

/// Cancel the outward velocity of the attachment points along their lines.
/// Returns the impulses applied.
fn remove_radial_velocity(
    state: &mut RigidBodyState,
    lines: &[LineConstraint; 2],
    tolerance: f64,
) -> [f64; 2] {
    let rows = lines.each_ref().map(|line| {
        let (lever_arm, normal, _) = engaged_line(state, line, tolerance)?;
        let radial = state.spatial.point_velocity(&lever_arm).dot(&normal);
        (radial > 0.0).then(|| {
            let impulse = radial / state.effective_inverse_mass(&lever_arm, &normal);
            (lever_arm.cross(&normal), normal, impulse)
        })
    });
    let weight = share(&rows);

    let inverse_mass = state.inverse_mass();
    let inverse_inertia = state.inverse_inertia();
    rows.map(|row| {
        let Some((angular, normal, impulse)) = row else {
            return 0.0;
        };
        let impulse = impulse * weight;
        state.spatial.velocity -= normal * impulse * inverse_mass;
        state.spatial.angular_velocity -= angular * impulse * inverse_inertia;
        impulse
    })
}
