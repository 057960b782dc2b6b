use nalgebra::Vector2;
use tracing::{debug, info};

use crate::components::{
    InitialCondition, RoadConditions, SimulationResult, SimulationSample, SteadyStateConfig,
    SteadyStateResult, VehicleSpec,
};
use crate::resources::{IntegratorConfig, SimulationConfig};
use crate::systems::{calculate_performance, integrate, steady_state_performance};
use crate::utils::Result;

/// Straight-line motion of a vehicle under a fixed throttle and road.
///
/// State is `[position, velocity]`; the acceleration comes from
/// [`calculate_performance`] at the current velocity.
#[derive(Debug, Clone)]
pub struct LongitudinalSimulator<'a> {
    spec: &'a VehicleSpec,
    conditions: RoadConditions,
    throttle: f64,
    integrator: IntegratorConfig,
    steady_state: SteadyStateConfig,
}

impl<'a> LongitudinalSimulator<'a> {
    /// Full throttle on a flat, calm road
    pub fn new(spec: &'a VehicleSpec) -> Self {
        Self {
            spec,
            conditions: RoadConditions::flat(),
            throttle: 1.0,
            integrator: IntegratorConfig::default(),
            steady_state: SteadyStateConfig::default(),
        }
    }

    /// Simulator for `config.vehicle` using the rest of the run configuration
    pub fn from_config(config: &'a SimulationConfig) -> Self {
        Self {
            spec: &config.vehicle,
            conditions: config.conditions,
            throttle: 1.0,
            integrator: config.integrator,
            steady_state: config.steady_state,
        }
    }

    pub fn with_conditions(mut self, conditions: RoadConditions) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn with_throttle(mut self, throttle: f64) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn with_integrator(mut self, integrator: IntegratorConfig) -> Self {
        self.integrator = integrator;
        self
    }

    pub fn with_steady_state(mut self, steady_state: SteadyStateConfig) -> Self {
        self.steady_state = steady_state;
        self
    }

    pub fn spec(&self) -> &VehicleSpec {
        self.spec
    }

    pub fn conditions(&self) -> &RoadConditions {
        &self.conditions
    }

    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    /// Time derivative of `[position, velocity]`
    pub fn derivatives(&self, state: &Vector2<f64>) -> Result<Vector2<f64>> {
        let velocity = state[1];
        let perf = calculate_performance(self.spec, velocity, self.throttle, &self.conditions)?;
        Ok(Vector2::new(velocity, perf.net_acceleration))
    }

    /// Integrates the motion from `initial` and samples it at `t_eval`.
    ///
    /// # Errors
    /// Propagates integrator failures and any error from the force model.
    pub fn simulate(&self, t_eval: &[f64], initial: InitialCondition) -> Result<SimulationResult> {
        debug!(
            throttle = self.throttle,
            samples = t_eval.len(),
            initial_velocity = initial.velocity,
            "starting simulation"
        );

        let states = integrate(
            |_t, y: &Vector2<f64>| self.derivatives(y),
            initial.time,
            Vector2::new(initial.position, initial.velocity),
            t_eval,
            &self.integrator,
        )?;

        let result = SimulationResult::new(
            states
                .into_iter()
                .map(|(time, y)| SimulationSample {
                    time,
                    position: y[0],
                    velocity: y[1],
                })
                .collect(),
        );

        if let Some(last) = result.last() {
            info!(
                time = last.time,
                position = last.position,
                velocity = last.velocity,
                "simulation complete"
            );
        }
        Ok(result)
    }

    /// Cruising condition at `speed` on this simulator's road, see
    /// [`steady_state_performance`].
    pub fn steady_state_performance(&self, speed: f64) -> Result<SteadyStateResult> {
        steady_state_performance(self.spec, speed, &self.conditions, &self.steady_state)
    }
}
