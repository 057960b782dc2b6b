use argmin::core::{CostFunction, Error as ArgminError, Executor, State};
use argmin::solver::brent::BrentOpt;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::components::{SteadyStateResult, VehicleSpec};
use crate::resources::SimulationConfig;
use crate::systems::{required_operating_point, steady_state_performance};
use crate::utils::{joules_per_meter_to_wh_per_mile, Result, SimError};

/// Steady cruise at one gear ratio, `None` fields where no steady state exists
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GearRatioEfficiency {
    pub gear_ratio: f64,
    pub throttle: Option<f64>,
    pub efficiency: Option<f64>,
}

/// Battery energy spent per distance at one cruise speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyMileage {
    pub speed: f64,
    /// [J/m]
    pub energy_per_distance: Option<f64>,
    pub wh_per_mile: Option<f64>,
}

/// Motor efficiency needed to hold a speed, ignoring the throttle model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EfficiencyMapCell {
    pub efficiency: f64,
    pub voltage: f64,
    pub current: f64,
    /// Operating point fits under the battery voltage and controller current
    pub within_limits: bool,
}

/// Efficiency over a gear ratio by cruise speed grid.
///
/// `cells[i][j]` is the point at `gear_ratios[i]` and `speeds[j]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyMap {
    pub gear_ratios: Vec<f64>,
    pub speeds: Vec<f64>,
    pub cells: Vec<Vec<EfficiencyMapCell>>,
}

impl EfficiencyMap {
    pub fn cell(&self, gear_index: usize, speed_index: usize) -> Option<&EfficiencyMapCell> {
        self.cells.get(gear_index)?.get(speed_index)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptimalGearRatio {
    pub gear_ratio: f64,
    pub steady_state: SteadyStateResult,
}

// Steady-state solve that treats a missing cruise condition as `None`
fn cruise_at(
    vehicle: &VehicleSpec,
    speed: f64,
    base: &SimulationConfig,
) -> Result<Option<SteadyStateResult>> {
    match steady_state_performance(vehicle, speed, &base.conditions, &base.steady_state) {
        Ok(result) => Ok(Some(result)),
        Err(SimError::NoSteadyStateFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Cruise efficiency at `speed` for each gear ratio.
pub fn cruise_efficiency_vs_gear_ratio(
    base: &SimulationConfig,
    gear_ratios: &[f64],
    speed: f64,
) -> Result<Vec<GearRatioEfficiency>> {
    let mut points = Vec::with_capacity(gear_ratios.len());
    for &gear_ratio in gear_ratios {
        let vehicle = base.vehicle.with_gear_ratio(gear_ratio);
        vehicle.validate()?;

        let cruise = cruise_at(&vehicle, speed, base)?;
        if cruise.is_none() {
            warn!(gear_ratio, speed, "no steady state, efficiency undefined");
        }
        points.push(GearRatioEfficiency {
            gear_ratio,
            throttle: cruise.map(|c| c.throttle),
            efficiency: cruise.map(|c| c.efficiency()),
        });
    }
    info!(points = points.len(), speed, "gear ratio efficiency sweep complete");
    Ok(points)
}

/// Energy mileage of the configured bike across cruise speeds.
///
/// Speeds at or below zero have no defined mileage and are recorded as `None`,
/// as are speeds the bike cannot hold.
pub fn energy_mileage_vs_speed(
    base: &SimulationConfig,
    speeds: &[f64],
) -> Result<Vec<EnergyMileage>> {
    let mut points = Vec::with_capacity(speeds.len());
    for &speed in speeds {
        let energy = if speed > 0.0 {
            cruise_at(&base.vehicle, speed, base)?.and_then(|c| c.energy_per_distance())
        } else {
            None
        };
        if energy.is_none() {
            debug!(speed, "mileage undefined");
        }
        points.push(EnergyMileage {
            speed,
            energy_per_distance: energy,
            wh_per_mile: energy.map(joules_per_meter_to_wh_per_mile),
        });
    }
    info!(points = points.len(), "mileage sweep complete");
    Ok(points)
}

/// Required-torque efficiency over a grid of gear ratios and speeds.
///
/// Each cell balances the road resistance exactly and solves the motor from
/// speed and torque, so cells can lie outside what the battery and controller
/// can supply; `within_limits` marks the ones that don't.
pub fn cruise_efficiency_map(
    base: &SimulationConfig,
    gear_ratios: &[f64],
    speeds: &[f64],
) -> Result<EfficiencyMap> {
    let mut cells = Vec::with_capacity(gear_ratios.len());
    for &gear_ratio in gear_ratios {
        let vehicle = base.vehicle.with_gear_ratio(gear_ratio);
        vehicle.validate()?;

        let mut row = Vec::with_capacity(speeds.len());
        for &speed in speeds {
            let state = required_operating_point(&vehicle, speed, &base.conditions)?;
            row.push(EfficiencyMapCell {
                efficiency: state.efficiency,
                voltage: state.voltage,
                current: state.current,
                within_limits: state.voltage <= vehicle.max_voltage
                    && state.current <= vehicle.max_current,
            });
        }
        cells.push(row);
    }

    Ok(EfficiencyMap {
        gear_ratios: gear_ratios.to_vec(),
        speeds: speeds.to_vec(),
        cells,
    })
}

/// Negative cruise efficiency as a function of gear ratio
struct GearRatioProblem<'a> {
    base: &'a SimulationConfig,
    speed: f64,
}

impl CostFunction for GearRatioProblem<'_> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, gear_ratio: &Self::Param) -> std::result::Result<Self::Output, ArgminError> {
        let vehicle = self.base.vehicle.with_gear_ratio(*gear_ratio);
        let cruise = cruise_at(&vehicle, self.speed, self.base)
            .map_err(|e| ArgminError::msg(e.to_string()))?;
        // A ratio that can't hold the speed is no better than a dead motor
        Ok(-cruise.map_or(0.0, |c| c.efficiency()))
    }
}

/// Gear ratio within `bounds` that cruises at `speed` most efficiently.
///
/// # Errors
/// * `InvalidParameter` - bounds not a positive interval.
/// * `NoSteadyStateFound` - no ratio in the interval holds the speed.
pub fn optimal_cruise_gear_ratio(
    base: &SimulationConfig,
    speed: f64,
    bounds: (f64, f64),
    max_iterations: u64,
) -> Result<OptimalGearRatio> {
    let (low, high) = bounds;
    if !(low > 0.0 && low < high && high.is_finite()) {
        return Err(SimError::InvalidParameter(format!(
            "gear ratio bounds must be a positive interval, got ({}, {})",
            low, high
        )));
    }

    let problem = GearRatioProblem { base, speed };
    let res = Executor::new(problem, BrentOpt::new(low, high))
        .configure(|state| state.max_iters(max_iterations))
        .run()
        .map_err(|e| SimError::InvalidParameter(format!("gear ratio search failed: {}", e)))?;

    let gear_ratio = res
        .state()
        .get_best_param()
        .copied()
        .ok_or(SimError::NoSteadyStateFound {
            speed,
            residual: f64::NAN,
        })?;

    let vehicle = base.vehicle.with_gear_ratio(gear_ratio);
    let steady_state =
        steady_state_performance(&vehicle, speed, &base.conditions, &base.steady_state)?;

    info!(
        gear_ratio,
        efficiency = steady_state.efficiency(),
        iterations = res.state().get_iter(),
        "optimal cruise gear ratio"
    );

    Ok(OptimalGearRatio {
        gear_ratio,
        steady_state,
    })
}
