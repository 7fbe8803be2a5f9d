use kiteflyer::{
    resources::SimulationConfig,
    simulation::{KiteSimulation, PilotInput},
    systems::analysis::FlightAnalyzer,
};

use super::FRAME_DT;

pub fn create_simulation(config: SimulationConfig) -> KiteSimulation {
    KiteSimulation::new(config).expect("test configuration should be valid")
}

/// Step `frames` fixed frames with a constant pilot input.
pub fn run_frames(simulation: &mut KiteSimulation, frames: usize, input: &impl PilotInput) {
    for _ in 0..frames {
        simulation.step(FRAME_DT, input);
    }
}

/// Step while feeding every frame into a fresh analyzer.
pub fn run_and_record(simulation: &mut KiteSimulation, frames: usize, input: &impl PilotInput) -> FlightAnalyzer {
    let mut analyzer = FlightAnalyzer::default();
    for _ in 0..frames {
        simulation.step(FRAME_DT, input);
        analyzer.record(simulation.flight_sample());
    }
    analyzer
}

/// Steps until `condition` holds, returning whether it did within `max_frames`.
pub fn wait_for_condition<F>(simulation: &mut KiteSimulation, condition: F, max_frames: usize) -> bool
where
    F: Fn(&KiteSimulation) -> bool,
{
    for _ in 0..max_frames {
        if condition(simulation) {
            return true;
        }
        simulation.step(FRAME_DT, &0.0);
    }
    condition(simulation)
}
