use serde::{Deserialize, Serialize};

/// Wind parameters as the pilot sets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindConfig {
    /// Base wind speed (km/h), ≥ 0.
    pub speed: f64,
    /// Heading the wind blows toward (degrees); 0° blows toward -Z.
    pub direction: f64,
    /// Turbulence intensity (%), 0–100.
    pub turbulence: f64,
    /// Per-axis perturbation frequencies (rad/s); distinct so the axes decorrelate.
    pub turbulence_frequencies: [f64; 3],
    /// Peak per-axis perturbation as a fraction of base speed at full turbulence.
    pub turbulence_scale: f64,
    /// Gust cycle frequency (Hz).
    pub gust_frequency: f64,
    /// Peak gust factor deviation at full turbulence.
    pub gust_amplitude: f64,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            speed: 18.0,
            direction: 0.0,
            turbulence: 0.0,
            turbulence_frequencies: [1.3, 0.7, 1.9],
            turbulence_scale: 0.3,
            gust_frequency: 0.2,
            gust_amplitude: 0.3,
        }
    }
}

impl WindConfig {
    pub fn new(speed: f64, direction: f64, turbulence: f64) -> Self {
        let mut config = Self::default();
        config.set(speed, direction, turbulence);
        config
    }

    /// Update the pilot-facing parameters, clamping them into range.
    pub fn set(&mut self, speed: f64, direction: f64, turbulence: f64) {
        if speed.is_finite() {
            self.speed = speed.max(0.0);
        }
        if direction.is_finite() {
            self.direction = direction.rem_euclid(360.0);
        }
        if turbulence.is_finite() {
            self.turbulence = turbulence.clamp(0.0, 100.0);
        }
    }

    /// Turbulence as a 0–1 intensity.
    pub fn intensity(&self) -> f64 {
        (self.turbulence / 100.0).clamp(0.0, 1.0)
    }
}
