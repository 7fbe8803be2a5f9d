use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::utils::{ANALYZER_HISTORY, ANALYZER_WINDOW, TREND_WINDOW};

// Altitude standard deviation treated as fully unstable (m).
const MAX_EXPECTED_AMPLITUDE: f64 = 2.0;

// Wobble classification
const WOBBLE_MIN_FREQUENCY: f64 = 2.0; // Hz
const WOBBLE_MIN_AMPLITUDE: f64 = 0.5; // m
const WOBBLE_MAX_AMPLITUDE: f64 = 2.0; // m
const WOBBLE_MAX_STABILITY: f64 = 0.7;

// Trend thresholds on the difference of means
const ALTITUDE_TREND_THRESHOLD: f64 = 0.1; // m
const SPEED_TREND_THRESHOLD: f64 = 0.5; // m/s
const FORCE_TREND_THRESHOLD: f64 = 1.0; // N

/// One frame of flight data as recorded by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightSample {
    /// Simulation time (s).
    pub timestamp: f64,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    /// Total aerodynamic force (N).
    pub force: Vector3<f64>,
    /// Mean sail incidence (rad).
    pub angle_of_attack: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillationMetrics {
    /// Standard deviation of altitude over the window (m).
    pub amplitude: f64,
    /// Vertical oscillation frequency (Hz).
    pub frequency: f64,
    /// 1 = steady, 0 = at or beyond the expected worst amplitude.
    pub stability: f64,
    pub is_wobbling: bool,
    /// 0–1, zero unless wobbling.
    pub severity: f64,
    pub description: String,
    pub sufficient_data: bool,
}

impl OscillationMetrics {
    fn insufficient() -> Self {
        Self {
            amplitude: 0.0,
            frequency: 0.0,
            stability: 1.0,
            is_wobbling: false,
            severity: 0.0,
            description: "Insufficient data".to_string(),
            sufficient_data: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AltitudeTrend {
    Stable,
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedTrend {
    Stable,
    Accelerating,
    Decelerating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceTrend {
    Stable,
    Increasing,
    Decreasing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub altitude: AltitudeTrend,
    pub speed: SpeedTrend,
    pub force: ForceTrend,
    pub sufficient_data: bool,
}

impl TrendAnalysis {
    fn insufficient() -> Self {
        Self {
            altitude: AltitudeTrend::Stable,
            speed: SpeedTrend::Stable,
            force: ForceTrend::Stable,
            sufficient_data: false,
        }
    }
}

/// Both analyses plus the buffer fill, for logging or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub samples: usize,
    pub duration: f64,
    pub oscillation: OscillationMetrics,
    pub trends: TrendAnalysis,
}

/// Trailing window of flight samples with wobble and trend detection.
///
/// Purely observational: nothing here feeds back into the simulation.
#[derive(Resource, Debug, Clone)]
pub struct FlightAnalyzer {
    history: VecDeque<FlightSample>,
    capacity: usize,
}

impl Default for FlightAnalyzer {
    fn default() -> Self {
        Self::new(ANALYZER_HISTORY)
    }
}

impl FlightAnalyzer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, sample: FlightSample) {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(sample);
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn history(&self) -> impl Iterator<Item = &FlightSample> {
        self.history.iter()
    }

    /// Vertical oscillation over the most recent window.
    pub fn oscillation(&self) -> OscillationMetrics {
        if self.history.len() < ANALYZER_WINDOW {
            return OscillationMetrics::insufficient();
        }

        let window: Vec<&FlightSample> = self.history.iter().skip(self.history.len() - ANALYZER_WINDOW).collect();
        let n = window.len() as f64;

        let mean_altitude = window.iter().map(|s| s.position.y).sum::<f64>() / n;
        let variance = window
            .iter()
            .map(|s| (s.position.y - mean_altitude).powi(2))
            .sum::<f64>()
            / n;
        let amplitude = variance.sqrt();

        let sign_changes = window
            .windows(2)
            .filter(|pair| {
                let (a, b) = (pair[0].velocity.y, pair[1].velocity.y);
                (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
            })
            .count();

        let duration = window[window.len() - 1].timestamp - window[0].timestamp;
        let frequency = if duration > 0.0 {
            sign_changes as f64 / (2.0 * duration)
        } else {
            0.0
        };

        let stability = (1.0 - amplitude / MAX_EXPECTED_AMPLITUDE).max(0.0);
        let is_wobbling = frequency > WOBBLE_MIN_FREQUENCY
            && (WOBBLE_MIN_AMPLITUDE..=WOBBLE_MAX_AMPLITUDE).contains(&amplitude)
            && stability < WOBBLE_MAX_STABILITY;

        let (severity, description) = if is_wobbling {
            let frequency_excess = ((frequency - WOBBLE_MIN_FREQUENCY) / WOBBLE_MIN_FREQUENCY).min(1.0);
            let severity = (0.5 * frequency_excess + 0.5 * (1.0 - stability)).clamp(0.0, 1.0);
            (
                severity,
                format!("Wobbling at {frequency:.1} Hz, amplitude {amplitude:.2} m"),
            )
        } else if stability >= WOBBLE_MAX_STABILITY {
            (0.0, "Stable flight".to_string())
        } else {
            (0.0, format!("Unsteady, amplitude {amplitude:.2} m"))
        };

        OscillationMetrics {
            amplitude,
            frequency,
            stability,
            is_wobbling,
            severity,
            description,
            sufficient_data: true,
        }
    }

    /// Compare the latest samples against the ones just before them.
    pub fn trends(&self) -> TrendAnalysis {
        let len = self.history.len();
        if len < 2 * TREND_WINDOW {
            return TrendAnalysis::insufficient();
        }

        let recent: Vec<&FlightSample> = self.history.iter().skip(len - TREND_WINDOW).collect();
        let previous: Vec<&FlightSample> =
            self.history.iter().skip(len - 2 * TREND_WINDOW).take(TREND_WINDOW).collect();

        let mean = |samples: &[&FlightSample], f: fn(&FlightSample) -> f64| {
            samples.iter().map(|s| f(s)).sum::<f64>() / samples.len() as f64
        };
        let delta = |f: fn(&FlightSample) -> f64| mean(&recent, f) - mean(&previous, f);

        let altitude = match delta(|s| s.position.y) {
            d if d > ALTITUDE_TREND_THRESHOLD => AltitudeTrend::Ascending,
            d if d < -ALTITUDE_TREND_THRESHOLD => AltitudeTrend::Descending,
            _ => AltitudeTrend::Stable,
        };
        let speed = match delta(|s| s.velocity.norm()) {
            d if d > SPEED_TREND_THRESHOLD => SpeedTrend::Accelerating,
            d if d < -SPEED_TREND_THRESHOLD => SpeedTrend::Decelerating,
            _ => SpeedTrend::Stable,
        };
        let force = match delta(|s| s.force.norm()) {
            d if d > FORCE_TREND_THRESHOLD => ForceTrend::Increasing,
            d if d < -FORCE_TREND_THRESHOLD => ForceTrend::Decreasing,
            _ => ForceTrend::Stable,
        };

        TrendAnalysis {
            altitude,
            speed,
            force,
            sufficient_data: true,
        }
    }

    pub fn summary(&self) -> FlightSummary {
        let duration = match (self.history.front(), self.history.back()) {
            (Some(first), Some(last)) => last.timestamp - first.timestamp,
            _ => 0.0,
        };

        FlightSummary {
            samples: self.history.len(),
            duration,
            oscillation: self.oscillation(),
            trends: self.trends(),
        }
    }
}
