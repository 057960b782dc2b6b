use serde::{Deserialize, Serialize};
use std::path::Path;

use super::integrator::IntegratorConfig;
use crate::components::{RoadConditions, SteadyStateConfig, VehicleSpec};
use crate::utils::{Result, SimError};

/// Everything one study run needs: the bike, the road and the solver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub vehicle: VehicleSpec,
    #[serde(default)]
    pub conditions: RoadConditions,
    #[serde(default)]
    pub integrator: IntegratorConfig,
    #[serde(default)]
    pub steady_state: SteadyStateConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            vehicle: VehicleSpec::default(),
            conditions: RoadConditions::flat(),
            integrator: IntegratorConfig::default(),
            steady_state: SteadyStateConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks the vehicle and solver settings, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        self.vehicle
            .validate()
            .map_err(|e| SimError::InvalidConfig(format!("vehicle: {}", e)))?;

        if !self.conditions.grade.is_finite() || !self.conditions.headwind.is_finite() {
            return Err(SimError::InvalidConfig(
                "road grade and headwind must be finite".to_string(),
            ));
        }

        let integrator = &self.integrator;
        if !(integrator.relative_tolerance > 0.0 && integrator.absolute_tolerance > 0.0) {
            return Err(SimError::InvalidConfig(
                "integrator tolerances must be positive".to_string(),
            ));
        }
        if !(integrator.min_step > 0.0) || integrator.max_steps == 0 {
            return Err(SimError::InvalidConfig(
                "integrator needs a positive min_step and max_steps".to_string(),
            ));
        }
        if let Some(step) = integrator.initial_step {
            if !(step >= integrator.min_step) {
                return Err(SimError::InvalidConfig(format!(
                    "initial_step {} is below min_step {}",
                    step, integrator.min_step
                )));
            }
        }

        let steady = &self.steady_state;
        if !(steady.tolerance > 0.0) || steady.max_iterations == 0 {
            return Err(SimError::InvalidConfig(
                "steady-state tolerance and max_iterations must be positive".to_string(),
            ));
        }
        let (low, high) = steady.throttle_range;
        if !(0.0 <= low && low <= high && high <= 1.0) {
            return Err(SimError::InvalidConfig(format!(
                "throttle_range ({}, {}) must be an interval within [0, 1]",
                low, high
            )));
        }

        Ok(())
    }
}
