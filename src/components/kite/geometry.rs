use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

// Body frame: origin at the centre of mass, +Y towards the nose, +Z towards
// the pilot (bridle side), +X to the kite's right as seen by the pilot.
const NOSE: [f64; 3] = [0.0, 0.55, 0.0];
const TAIL: [f64; 3] = [0.0, -0.35, 0.0];
// Tips swept downwind of the spine give the sail its dihedral.
const LEFT_TIP: [f64; 3] = [-0.825, -0.2, -0.2];
const RIGHT_TIP: [f64; 3] = [0.825, -0.2, -0.2];
// Spine crease, bulging towards the pilot. The lower panels unload first as
// the angle of attack drops, which moves the pressure centre forward.
const KEEL: [f64; 3] = [0.0, 0.03, 0.13];
const LEFT_CONTROL: [f64; 3] = [-0.15, 0.26, 0.45];
const RIGHT_CONTROL: [f64; 3] = [0.15, 0.26, 0.45];

/// Sail panels of the standard delta, mirrored about the spine.
pub const DELTA_SAIL_PANELS: [[[f64; 3]; 3]; 4] = [
    [NOSE, LEFT_TIP, KEEL],
    [KEEL, LEFT_TIP, TAIL],
    [NOSE, RIGHT_TIP, KEEL],
    [KEEL, RIGHT_TIP, TAIL],
];

/// Structural points used for ground contact.
pub const DELTA_FRAME_POINTS: [[f64; 3]; 7] = [
    NOSE,
    TAIL,
    LEFT_TIP,
    RIGHT_TIP,
    KEEL,
    LEFT_CONTROL,
    RIGHT_CONTROL,
];

#[inline]
fn vector(p: [f64; 3]) -> Vector3<f64> {
    Vector3::new(p[0], p[1], p[2])
}

/// A triangular sail panel in body-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SailSurface {
    pub vertices: [Vector3<f64>; 3],
    /// Panel area (m²), computed once at construction.
    pub area: f64,
}

impl SailSurface {
    pub fn new(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Self {
        let area = 0.5 * (b - a).cross(&(c - a)).norm();
        Self {
            vertices: [a, b, c],
            area,
        }
    }

    pub fn from_table(panel: &[[f64; 3]; 3]) -> Self {
        Self::new(vector(panel[0]), vector(panel[1]), vector(panel[2]))
    }

    /// Unit normal from the winding order. Zero for a degenerate panel.
    pub fn local_normal(&self) -> Vector3<f64> {
        let [a, b, c] = &self.vertices;
        (b - a)
            .cross(&(c - a))
            .try_normalize(1e-12)
            .unwrap_or_else(Vector3::zeros)
    }

    pub fn centroid(&self) -> Vector3<f64> {
        let [a, b, c] = &self.vertices;
        (a + b + c) / 3.0
    }
}

/// Fixed geometry of one kite model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KiteGeometry {
    pub surfaces: Vec<SailSurface>,
    /// Left line attachment (bridle point), body frame.
    pub left_attachment: Vector3<f64>,
    /// Right line attachment (bridle point), body frame.
    pub right_attachment: Vector3<f64>,
    /// Frame points tested against the ground plane.
    pub frame_points: Vec<Vector3<f64>>,
}

impl KiteGeometry {
    /// Standard two-line delta: four creased panels, tow points forward of the
    /// centre of mass on the pilot side.
    pub fn delta() -> Self {
        Self {
            surfaces: DELTA_SAIL_PANELS.iter().map(SailSurface::from_table).collect(),
            left_attachment: vector(LEFT_CONTROL),
            right_attachment: vector(RIGHT_CONTROL),
            frame_points: DELTA_FRAME_POINTS.iter().copied().map(vector).collect(),
        }
    }

    pub fn total_area(&self) -> f64 {
        self.surfaces.iter().map(|s| s.area).sum()
    }

    pub fn attachments(&self) -> [Vector3<f64>; 2] {
        [self.left_attachment, self.right_attachment]
    }
}

impl Default for KiteGeometry {
    fn default() -> Self {
        Self::delta()
    }
}
