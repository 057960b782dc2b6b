use serde::{Deserialize, Serialize};

use crate::utils::STEADY_STATE_TOLERANCE;

/// Configuration for the steady-state solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteadyStateConfig {
    /// Largest net acceleration accepted as steady [m/s^2]
    pub tolerance: f64,
    /// Maximum number of root-finder iterations
    pub max_iterations: u64,
    /// Throttle search interval
    pub throttle_range: (f64, f64),
}

impl Default for SteadyStateConfig {
    fn default() -> Self {
        Self {
            tolerance: STEADY_STATE_TOLERANCE,
            max_iterations: 100,
            throttle_range: (0.0, 1.0),
        }
    }
}
