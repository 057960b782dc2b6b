use argmin::core::{CostFunction, Error as ArgminError, Executor, State};
use argmin::solver::brent::BrentRoot;
use tracing::{debug, warn};

use crate::components::{RoadConditions, SteadyStateConfig, SteadyStateResult, VehicleSpec};
use crate::systems::calculate_performance;
use crate::utils::{Result, SimError};

// Bracket width at which Brent stops refining the throttle
const THROTTLE_TOLERANCE: f64 = 1e-12;

/// Net acceleration as a function of throttle at a fixed road speed
#[derive(Clone)]
pub struct SteadyStateProblem<'a> {
    pub spec: &'a VehicleSpec,
    pub conditions: &'a RoadConditions,
    pub speed: f64,
}

impl CostFunction for SteadyStateProblem<'_> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, throttle: &Self::Param) -> std::result::Result<Self::Output, ArgminError> {
        let throttle = throttle.clamp(0.0, 1.0);
        let perf = calculate_performance(self.spec, self.speed, throttle, self.conditions)
            .map_err(|e| ArgminError::msg(e.to_string()))?;
        Ok(perf.net_acceleration)
    }
}

/// Finds the throttle that holds `speed` with zero net acceleration.
///
/// Net acceleration never decreases with throttle, so the throttle interval
/// brackets a root only when the endpoints straddle zero. Endpoints are
/// checked first; otherwise Brent's method narrows the bracket and the
/// result is re-evaluated against `config.tolerance`.
///
/// # Errors
/// * `NoSteadyStateFound` - no throttle in range balances the resistance,
///   typically above top speed or on a descent steep enough to coast.
/// * `InvalidParameter` - speed not finite or throttle range outside [0, 1].
pub fn steady_state_performance(
    spec: &VehicleSpec,
    speed: f64,
    conditions: &RoadConditions,
    config: &SteadyStateConfig,
) -> Result<SteadyStateResult> {
    let (low, high) = config.throttle_range;
    if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) || low > high {
        return Err(SimError::InvalidParameter(format!(
            "throttle range must lie within [0, 1], got ({}, {})",
            low, high
        )));
    }

    let at_low = calculate_performance(spec, speed, low, conditions)?;
    if at_low.net_acceleration.abs() <= config.tolerance {
        return Ok(SteadyStateResult {
            speed,
            throttle: low,
            performance: at_low,
            iterations: 0,
        });
    }
    let at_high = calculate_performance(spec, speed, high, conditions)?;
    if at_high.net_acceleration.abs() <= config.tolerance {
        return Ok(SteadyStateResult {
            speed,
            throttle: high,
            performance: at_high,
            iterations: 0,
        });
    }

    if at_low.net_acceleration.signum() == at_high.net_acceleration.signum() {
        // Closest the throttle range gets to balance
        let residual = if at_low.net_acceleration > 0.0 {
            at_low.net_acceleration
        } else {
            at_high.net_acceleration
        };
        warn!(speed, residual, "throttle range does not bracket a steady state");
        return Err(SimError::NoSteadyStateFound { speed, residual });
    }

    let problem = SteadyStateProblem {
        spec,
        conditions,
        speed,
    };
    let solver = BrentRoot::new(low, high, THROTTLE_TOLERANCE);

    let res = Executor::new(problem, solver)
        .configure(|state| state.max_iters(config.max_iterations))
        .run()
        .map_err(|e| {
            warn!(speed, error = %e, "steady-state root finder failed");
            SimError::NoSteadyStateFound {
                speed,
                residual: at_high.net_acceleration,
            }
        })?;

    let iterations = res.state().get_iter();
    let throttle = res
        .state()
        .get_best_param()
        .copied()
        .unwrap_or(high)
        .clamp(low, high);

    let performance = calculate_performance(spec, speed, throttle, conditions)?;
    if performance.net_acceleration.abs() > config.tolerance {
        warn!(
            speed,
            throttle,
            residual = performance.net_acceleration,
            "steady-state residual above tolerance"
        );
        return Err(SimError::NoSteadyStateFound {
            speed,
            residual: performance.net_acceleration,
        });
    }

    debug!(
        speed,
        throttle,
        iterations,
        efficiency = performance.motor_state.efficiency,
        "steady state found"
    );

    Ok(SteadyStateResult {
        speed,
        throttle,
        performance,
        iterations,
    })
}

impl VehicleSpec {
    /// Cruising condition at a road speed, see [`steady_state_performance`].
    pub fn steady_state(
        &self,
        speed: f64,
        conditions: &RoadConditions,
        config: &SteadyStateConfig,
    ) -> Result<SteadyStateResult> {
        steady_state_performance(self, speed, conditions, config)
    }
}
