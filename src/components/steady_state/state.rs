use serde::{Deserialize, Serialize};

use crate::components::{MotorState, VehiclePerformance};

/// A cruising condition: the throttle that holds a road speed with zero net acceleration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteadyStateResult {
    /// Road speed held [m/s]
    pub speed: f64,
    /// Throttle setting that holds it [0-1]
    pub throttle: f64,
    /// Full force balance at the solution
    pub performance: VehiclePerformance,
    /// Root-finder iterations used, 0 when an endpoint already balanced
    pub iterations: u64,
}

impl SteadyStateResult {
    pub fn motor_state(&self) -> &MotorState {
        &self.performance.motor_state
    }

    pub fn efficiency(&self) -> f64 {
        self.performance.motor_state.efficiency
    }

    /// Net acceleration left at the solution [m/s^2]
    pub fn residual(&self) -> f64 {
        self.performance.net_acceleration
    }

    /// Battery energy spent per meter travelled [J/m], `None` unless moving forward
    pub fn energy_per_distance(&self) -> Option<f64> {
        if self.speed > 0.0 {
            Some(self.performance.motor_state.electrical_power() / self.speed)
        } else {
            None
        }
    }
}
