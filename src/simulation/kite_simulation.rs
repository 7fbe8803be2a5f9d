use bevy::log::{debug, info, warn};
use bevy::prelude::Resource;
use nalgebra::Vector3;

use crate::components::{
    BridleConfiguration, ControlBarState, LineConstraint, LineReport, LineSide, RigidBodyState,
    SpatialComponent,
};
use crate::resources::{SimulationConfig, WindField, WindSample};
use crate::simulation::PilotInput;
use crate::systems::{
    aerodynamics::{AeroForces, AerodynamicsModel, AirData},
    analysis::FlightSample,
    collisions::{resolve_ground_contact, GroundContact},
    constraints::LineConstraintSolver,
    control::{refresh_handles, update_rotation},
    physics::{calculate_net_forces_moments, IntegrationReport, RigidBodyIntegrator},
};
use crate::utils::ConfigError;

/// The whole two-line kite engine: one kite, one bar, one wind field.
///
/// Each [`step`](Self::step) runs a fixed pipeline per sub-step:
/// bar → wind → air data → aerodynamics → gravity → integrate (predict) →
/// line solve → ground → commit, then refreshes the handles for rendering.
/// Nothing inside a step can fail; numerical trouble is absorbed and logged.
#[derive(Resource, Debug, Clone)]
pub struct KiteSimulation {
    config: SimulationConfig,
    state: RigidBodyState,
    control_bar: ControlBarState,
    lines: [LineConstraint; 2],
    bridle: BridleConfiguration,
    wind: WindField,
    aerodynamics: AerodynamicsModel,
    integrator: RigidBodyIntegrator,
    solver: LineConstraintSolver,
    last_aero: AeroForces,
    last_air_data: AirData,
    last_wind: WindSample,
    last_lines: [LineReport; 2],
    last_integration: IntegrationReport,
    last_contact: Option<GroundContact>,
    elapsed: f64,
    paused: bool,
}

impl KiteSimulation {
    /// Build the engine from a validated configuration, kite at its start pose.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let [left_attachment, right_attachment] = config.kite.geometry.attachments();
        let rest_length = config.lines.length;
        let lines = [
            LineConstraint::new(LineSide::Left, left_attachment, rest_length),
            LineConstraint::new(LineSide::Right, right_attachment, rest_length),
        ];

        let mut simulation = Self {
            state: initial_state(&config),
            control_bar: ControlBarState::new(&config.control_bar),
            lines,
            bridle: config.kite.bridle,
            wind: WindField::new(config.environment.wind.clone()),
            aerodynamics: AerodynamicsModel::new(
                config.kite.geometry.surfaces.clone(),
                config.aerodynamics.clone(),
            ),
            integrator: RigidBodyIntegrator::new(config.integrator.clone()),
            solver: LineConstraintSolver::new(config.lines.clone()),
            last_aero: AeroForces::default(),
            last_air_data: AirData::default(),
            last_wind: WindSample::default(),
            last_lines: [LineReport::default(); 2],
            last_integration: IntegrationReport::default(),
            last_contact: None,
            elapsed: 0.0,
            paused: false,
            config,
        };
        simulation.refresh_control_bar();
        simulation.last_wind = simulation.wind.evaluate(&simulation.state.position());

        Ok(simulation)
    }

    /// Advance by `dt` seconds of wall time.
    ///
    /// `dt` is capped at `physics.max_timestep` and split into
    /// `physics.substeps`; non-positive or non-finite steps are ignored.
    /// Does nothing while paused.
    pub fn step(&mut self, dt: f64, input: &impl PilotInput) {
        if self.paused {
            return;
        }
        if !(dt.is_finite() && dt > 0.0) {
            debug!("Ignoring step with dt = {}", dt);
            return;
        }

        let frame_dt = dt.min(self.config.physics.max_timestep);
        let substeps = self.config.physics.substeps.max(1);
        let h = frame_dt / substeps as f64;
        let target = input.target_rotation();

        for _ in 0..substeps {
            self.substep(h, target);
        }

        self.refresh_control_bar();
    }

    fn substep(&mut self, h: f64, target_rotation: f64) {
        update_rotation(&mut self.control_bar, target_rotation, &self.config.control_bar, h);

        let position = self.state.position();
        self.last_wind = self.wind.sample(&position, h);
        let density = self.config.environment.atmosphere.density(position.y);
        self.last_air_data = AirData::calculate(
            &self.state.spatial,
            self.last_wind.velocity,
            density,
            self.config.aerodynamics.max_apparent_wind,
        );

        self.last_aero = self.aerodynamics.compute_forces(
            &self.last_air_data,
            &self.state.attitude(),
            &position,
            self.bridle,
        );

        let loads = calculate_net_forces_moments(&self.state, &self.last_aero, self.config.physics.gravity);
        self.last_integration = self
            .integrator
            .integrate(&mut self.state, loads.force, loads.torque, h);

        // Handles follow the predicted pose before the lines are enforced
        self.refresh_control_bar();
        self.last_lines = self.solver.solve(&mut self.state, &self.lines, h);

        self.last_contact = resolve_ground_contact(
            &mut self.state,
            &self.config.kite.geometry.frame_points,
            self.config.physics.ground_height,
            self.config.physics.ground_friction,
        );

        self.elapsed += h;
    }

    /// Recompute the handle positions from the current bar rotation and
    /// kite pose, and copy them into the line constraints.
    fn refresh_control_bar(&mut self) {
        let spatial = &self.state.spatial;
        let left = spatial.to_world(&self.lines[0].attachment);
        let right = spatial.to_world(&self.lines[1].attachment);
        refresh_handles(&mut self.control_bar, &self.config.control_bar, &left, &right);

        let handles = self.control_bar.handles();
        for line in &mut self.lines {
            line.handle = handles[line.side.index()];
        }
    }

    /// Put the kite back at its start pose with the bar centred and the
    /// wind clock rewound. Current wind, line length and bridle are kept.
    pub fn reset(&mut self) {
        self.state = initial_state(&self.config);
        self.control_bar = ControlBarState::new(&self.config.control_bar);
        self.wind.reset();
        self.last_aero = AeroForces::default();
        self.last_air_data = AirData::default();
        self.last_lines = [LineReport::default(); 2];
        self.last_integration = IntegrationReport::default();
        self.last_contact = None;
        self.elapsed = 0.0;
        self.refresh_control_bar();
        self.last_wind = self.wind.evaluate(&self.state.position());

        info!(
            "Kite simulation reset: position {:?}, wind {:.1} km/h",
            self.state.position(),
            self.config.environment.wind.speed
        );
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Update wind speed (km/h), heading (deg) and turbulence (%); clamped.
    pub fn set_wind(&mut self, speed: f64, direction: f64, turbulence: f64) {
        self.wind.set_wind(speed, direction, turbulence);
        self.config.environment.wind = self.wind.config().clone();
    }

    /// Set the rest length of both lines. Non-positive values are ignored.
    pub fn set_line_length(&mut self, length: f64) {
        if !(length.is_finite() && length > 0.0) {
            warn!("Ignoring invalid line length {}", length);
            return;
        }
        self.config.lines.length = length;
        self.solver.set_rest_length(length);
        for line in &mut self.lines {
            line.rest_length = length;
        }
    }

    /// Set the bridle calibration, clamped to [0.5, 1.5].
    pub fn set_bridle_factor(&mut self, factor: f64) {
        self.bridle.set_factor(factor);
        self.config.kite.bridle = self.bridle;
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &RigidBodyState {
        &self.state
    }

    pub fn spatial(&self) -> &SpatialComponent {
        &self.state.spatial
    }

    pub fn control_bar(&self) -> &ControlBarState {
        &self.control_bar
    }

    pub fn lines(&self) -> &[LineConstraint; 2] {
        &self.lines
    }

    pub fn line_reports(&self) -> &[LineReport; 2] {
        &self.last_lines
    }

    pub fn aerodynamics(&self) -> &AeroForces {
        &self.last_aero
    }

    pub fn air_data(&self) -> &AirData {
        &self.last_air_data
    }

    pub fn wind(&self) -> &WindSample {
        &self.last_wind
    }

    pub fn integration_report(&self) -> &IntegrationReport {
        &self.last_integration
    }

    pub fn ground_contact(&self) -> Option<&GroundContact> {
        self.last_contact.as_ref()
    }

    pub fn bridle(&self) -> BridleConfiguration {
        self.bridle
    }

    /// Simulated time since construction or the last reset (s).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// World positions of the left and right bridle points.
    pub fn attachment_points(&self) -> [Vector3<f64>; 2] {
        self.lines.map(|line| self.state.spatial.to_world(&line.attachment))
    }

    /// The current frame packaged for the flight analyzer.
    pub fn flight_sample(&self) -> FlightSample {
        FlightSample {
            timestamp: self.elapsed,
            position: self.state.position(),
            velocity: self.state.velocity(),
            force: self.last_aero.total(),
            angle_of_attack: self.last_aero.angle_of_attack,
        }
    }
}

fn initial_state(config: &SimulationConfig) -> RigidBodyState {
    let start = &config.kite.start;
    let direction = config.environment.wind.direction;
    let spatial = SpatialComponent {
        position: start.position(&config.control_bar.pilot_position, direction),
        attitude: start.oriented_attitude(direction),
        ..Default::default()
    };
    RigidBodyState::new(spatial, config.kite.mass, config.kite.inertia)
}
