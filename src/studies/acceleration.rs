use serde::Serialize;
use tracing::info;

use crate::components::{InitialCondition, SimulationResult};
use crate::resources::SimulationConfig;
use crate::systems::LongitudinalSimulator;
use crate::utils::Result;

/// Full-throttle launch from rest for one gear ratio
#[derive(Debug, Clone, Serialize)]
pub struct AccelerationProfile {
    pub gear_ratio: f64,
    pub result: SimulationResult,
}

impl AccelerationProfile {
    pub fn final_velocity(&self) -> Option<f64> {
        self.result.last().map(|s| s.velocity)
    }
}

/// Launches the configured bike from rest once per gear ratio and samples
/// each run at `t_eval`.
pub fn acceleration_profiles(
    base: &SimulationConfig,
    gear_ratios: &[f64],
    t_eval: &[f64],
) -> Result<Vec<AccelerationProfile>> {
    let mut profiles = Vec::with_capacity(gear_ratios.len());
    for &gear_ratio in gear_ratios {
        let vehicle = base.vehicle.with_gear_ratio(gear_ratio);
        vehicle.validate()?;

        let result = LongitudinalSimulator::new(&vehicle)
            .with_conditions(base.conditions)
            .with_integrator(base.integrator)
            .simulate(t_eval, InitialCondition::at_rest())?;

        profiles.push(AccelerationProfile { gear_ratio, result });
    }
    info!(profiles = profiles.len(), "acceleration sweep complete");
    Ok(profiles)
}
