use bevy::prelude::*;
use kiteflyer::{
    components::{ControlBarState, SpatialComponent},
    plugins::{Kite, KitePhysicsPlugin},
    simulation::{KiteSimulation, PilotCommand},
    systems::analysis::FlightAnalyzer,
};

use crate::common::{assert_spatial_valid, create_scenario_config};

fn build_app() -> App {
    let plugin = KitePhysicsPlugin::new(create_scenario_config()).unwrap();
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(plugin);
    app.update();
    app
}

fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

#[test]
fn test_entity_mirrors_simulation() {
    let mut app = build_app();
    app.world_mut().insert_resource(PilotCommand::new(0.3));
    run_ticks(&mut app, 60);

    let world = app.world_mut();
    let simulation = world.resource::<KiteSimulation>().clone();
    let mut query = world.query_filtered::<(&SpatialComponent, &ControlBarState), With<Kite>>();
    let (spatial, bar) = query.single(world);

    assert_spatial_valid(spatial);
    assert_eq!(*spatial, *simulation.spatial());
    assert_eq!(*bar, *simulation.control_bar());
    assert!(bar.rotation > 0.0);
}

#[test]
fn test_analyzer_fills_from_fixed_ticks() {
    let mut app = build_app();
    run_ticks(&mut app, 200);

    let analyzer = app.world().resource::<FlightAnalyzer>();
    let summary = analyzer.summary();
    assert_eq!(summary.samples, 120);
    assert!(summary.oscillation.sufficient_data);
}

#[test]
fn test_paused_simulation_does_not_record() {
    let mut app = build_app();
    run_ticks(&mut app, 5);
    app.world_mut().resource_mut::<KiteSimulation>().set_paused(true);
    let recorded = app.world().resource::<FlightAnalyzer>().len();
    let elapsed = app.world().resource::<KiteSimulation>().elapsed();

    run_ticks(&mut app, 20);
    assert_eq!(app.world().resource::<FlightAnalyzer>().len(), recorded);
    assert_eq!(app.world().resource::<KiteSimulation>().elapsed(), elapsed);
}
