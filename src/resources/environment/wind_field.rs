use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::config::WindConfig;
use crate::utils::kmh_to_ms;

/// Spatial phase shift per metre, decorrelating turbulence along the line.
const SPATIAL_PHASE_GAIN: f64 = 0.1;

/// Wind seen at one point for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    /// Wind velocity in world space (m/s).
    pub velocity: Vector3<f64>,
    /// Turbulence intensity, 0–1.
    pub turbulence_intensity: f64,
    /// Multiplicative gust factor applied to the velocity.
    pub gust_factor: f64,
}

impl Default for WindSample {
    fn default() -> Self {
        Self {
            velocity: Vector3::zeros(),
            turbulence_intensity: 0.0,
            gust_factor: 1.0,
        }
    }
}

/// Time-varying wind: steady base vector plus sinusoidal turbulence and gusts.
///
/// The only state is the phase clock; the same clock and parameters always
/// produce the same sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindField {
    config: WindConfig,
    time: f64,
}

impl WindField {
    pub fn new(config: WindConfig) -> Self {
        Self { config, time: 0.0 }
    }

    pub fn config(&self) -> &WindConfig {
        &self.config
    }

    pub fn set_wind(&mut self, speed: f64, direction: f64, turbulence: f64) {
        self.config.set(speed, direction, turbulence);
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Steady wind vector with no turbulence applied (m/s).
    pub fn base_velocity(&self) -> Vector3<f64> {
        let speed = kmh_to_ms(self.config.speed);
        let heading = self.config.direction.to_radians();
        Vector3::new(-speed * heading.sin(), 0.0, -speed * heading.cos())
    }

    /// Advance the clock by `dt` and sample the wind at `position`.
    pub fn sample(&mut self, position: &Vector3<f64>, dt: f64) -> WindSample {
        if dt.is_finite() && dt > 0.0 {
            self.time += dt;
        }
        self.evaluate(position)
    }

    /// Sample at the current clock without advancing it.
    pub fn evaluate(&self, position: &Vector3<f64>) -> WindSample {
        let base = self.base_velocity();
        let intensity = self.config.intensity();

        if intensity <= 0.0 {
            return WindSample {
                velocity: base,
                turbulence_intensity: 0.0,
                gust_factor: 1.0,
            };
        }

        let t = self.time;
        let [fx, fy, fz] = self.config.turbulence_frequencies;
        let spatial_phase = SPATIAL_PHASE_GAIN * (position.x + position.z);
        let amplitude = kmh_to_ms(self.config.speed) * self.config.turbulence_scale * intensity;

        let perturbation = Vector3::new(
            (fx * t + spatial_phase).sin(),
            (fy * t + 0.5 * spatial_phase).sin() * 0.5,
            (fz * t - spatial_phase).sin(),
        ) * amplitude;

        let gust_phase = TAU * self.config.gust_frequency * t;
        let gust_factor = 1.0 + gust_phase.sin() * self.config.gust_amplitude * intensity;

        WindSample {
            velocity: (base + perturbation) * gust_factor,
            turbulence_intensity: intensity,
            gust_factor,
        }
    }
}

impl Default for WindField {
    fn default() -> Self {
        Self::new(WindConfig::default())
    }
}
