use bevy::{log::LogPlugin, prelude::*};
use kiteflyer::{
    plugins::KitePhysicsPlugin,
    resources::SimulationConfig,
    simulation::{KiteSimulation, PilotCommand},
    systems::analysis::FlightAnalyzer,
    utils::ConfigError,
};

/// Fly the kite headless for ten seconds, weaving the bar every two
/// seconds, and print the flight summary as YAML.
///
/// Usage: `cargo run --example headless_flight [config.yaml]`
fn main() -> Result<(), ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    let ticks = (10.0 / config.physics.max_timestep).round() as usize;

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(KitePhysicsPlugin::new(config)?);
    app.update();

    for tick in 0..ticks {
        let steer = if (tick / 120) % 2 == 0 { 0.2 } else { -0.2 };
        app.world_mut().insert_resource(PilotCommand::new(steer));
        app.world_mut().run_schedule(FixedUpdate);
    }

    let simulation = app.world().resource::<KiteSimulation>();
    info!(
        "Final position {:?}, line tension {:.1}/{:.1} N",
        simulation.state().position(),
        simulation.line_reports()[0].tension,
        simulation.line_reports()[1].tension
    );

    let summary = app.world().resource::<FlightAnalyzer>().summary();
    println!("{}", serde_yaml::to_string(&summary)?);
    Ok(())
}
