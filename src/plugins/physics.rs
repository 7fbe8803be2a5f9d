use bevy::prelude::*;

use crate::components::{ControlBarState, SpatialComponent};
use crate::resources::SimulationConfig;
use crate::simulation::{KiteSimulation, PilotCommand};
use crate::systems::{
    analysis::FlightAnalyzer, collisions::GroundContact, control::keyboard_steering_system,
};
use crate::utils::ConfigError;

/// Kite physics stages, run in order every fixed tick.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum KitePhysicsSet {
    Input,
    Step,
    Sync,
}

/// Marks the entity that mirrors the simulated kite.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Kite;

/// Request to put the kite back at its start pose.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetKite;

/// Step length used for every fixed tick (s).
#[derive(Resource, Debug, Clone, Copy)]
pub struct KitePhysicsTimestep(pub f64);

/// Runs the kite engine inside a bevy app.
///
/// The simulation lives in a [`KiteSimulation`] resource and is the only
/// writer of kite state; the spawned [`Kite`] entity's `SpatialComponent`,
/// `ControlBarState` and `Transform` are read-only copies for rendering.
pub struct KitePhysicsPlugin {
    simulation: KiteSimulation,
    timestep: f64,
}

impl KitePhysicsPlugin {
    /// Validate `config` and build the plugin, ticking at `physics.max_timestep`.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let timestep = config.physics.max_timestep;
        Ok(Self {
            simulation: KiteSimulation::new(config)?,
            timestep,
        })
    }

    /// Tick at `timestep` instead. Values above `physics.max_timestep` are
    /// clamped by the simulation.
    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    fn spawn_kite(mut commands: Commands, simulation: Res<KiteSimulation>) {
        let spatial = *simulation.spatial();
        commands.spawn((
            Kite,
            Name::new("kite"),
            spatial,
            *simulation.control_bar(),
            spatial.to_transform(),
        ));
        info!(
            "Kite physics started: line {:.1} m, wind {:.1} km/h",
            simulation.config().lines.length,
            simulation.config().environment.wind.speed
        );
    }
}

impl Plugin for KitePhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.simulation.clone())
            .insert_resource(KitePhysicsTimestep(self.timestep))
            .init_resource::<PilotCommand>()
            .init_resource::<FlightAnalyzer>()
            .add_event::<GroundContact>()
            .add_event::<ResetKite>();

        app.insert_resource(Time::<Fixed>::from_seconds(self.timestep));

        app.configure_sets(
            FixedUpdate,
            (KitePhysicsSet::Input, KitePhysicsSet::Step, KitePhysicsSet::Sync).chain(),
        );

        app.add_systems(Startup, Self::spawn_kite).add_systems(
            FixedUpdate,
            (
                keyboard_steering_system.in_set(KitePhysicsSet::Input),
                (reset_kite_system, step_kite_system)
                    .chain()
                    .in_set(KitePhysicsSet::Step),
                (sync_kite_system, record_flight_system).in_set(KitePhysicsSet::Sync),
            ),
        );
    }
}

fn reset_kite_system(
    mut events: EventReader<ResetKite>,
    mut simulation: ResMut<KiteSimulation>,
    mut analyzer: ResMut<FlightAnalyzer>,
) {
    if events.read().count() > 0 {
        simulation.reset();
        analyzer.clear();
    }
}

fn step_kite_system(
    mut simulation: ResMut<KiteSimulation>,
    command: Res<PilotCommand>,
    timestep: Res<KitePhysicsTimestep>,
    mut contacts: EventWriter<GroundContact>,
) {
    if simulation.is_paused() {
        return;
    }
    simulation.step(timestep.0, &*command);

    if let Some(contact) = simulation.ground_contact() {
        contacts.send(*contact);
    }
}

/// Scene-graph adapter: copy the committed pose onto the kite entity.
fn sync_kite_system(
    simulation: Res<KiteSimulation>,
    mut query: Query<(&mut SpatialComponent, &mut ControlBarState, &mut Transform), With<Kite>>,
) {
    for (mut spatial, mut bar, mut transform) in query.iter_mut() {
        *spatial = *simulation.spatial();
        *bar = *simulation.control_bar();
        *transform = spatial.to_transform();
    }
}

fn record_flight_system(simulation: Res<KiteSimulation>, mut analyzer: ResMut<FlightAnalyzer>) {
    if !simulation.is_paused() {
        analyzer.record(simulation.flight_sample());
    }
}
