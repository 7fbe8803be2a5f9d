use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{LINE_SOLVER_MAX_PASSES, LINE_SOLVER_PASSES, LINE_TOLERANCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineSide {
    Left,
    Right,
}

impl LineSide {
    pub fn index(self) -> usize {
        match self {
            LineSide::Left => 0,
            LineSide::Right => 1,
        }
    }
}

/// Flying line settings shared by both lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    /// Rest length of both lines (m).
    pub length: f64,
    /// Stretch allowed before a line counts as taut (m).
    pub tolerance: f64,
    /// Solver passes always run per frame.
    pub solver_passes: usize,
    /// Upper bound on passes while a line is still over-stretched.
    pub max_solver_passes: usize,
    /// Estimated tension above which a warning is raised (N).
    pub break_tension: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            length: 15.0,
            tolerance: LINE_TOLERANCE,
            solver_passes: LINE_SOLVER_PASSES,
            max_solver_passes: LINE_SOLVER_MAX_PASSES,
            break_tension: 200.0,
        }
    }
}

/// One inextensible line from a bridle point to a handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineConstraint {
    pub side: LineSide,
    /// Attachment point, body frame.
    pub attachment: Vector3<f64>,
    /// Handle position, world frame.
    pub handle: Vector3<f64>,
    pub rest_length: f64,
}

impl LineConstraint {
    pub fn new(side: LineSide, attachment: Vector3<f64>, rest_length: f64) -> Self {
        Self {
            side,
            attachment,
            handle: Vector3::zeros(),
            rest_length,
        }
    }
}

/// Post-solve state of one line.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineReport {
    /// Distance from attachment to handle after solving (m).
    pub distance: f64,
    /// Line is at (or beyond) rest length.
    pub taut: bool,
    /// Tension estimated from this frame's corrections (N).
    pub tension: f64,
}

impl LineReport {
    pub fn stretch(&self, rest_length: f64) -> f64 {
        self.distance - rest_length
    }
}
