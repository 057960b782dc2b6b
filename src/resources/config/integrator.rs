use serde::{Deserialize, Serialize};

/// Step-size control for the adaptive integrator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegratorConfig {
    /// Relative error tolerance per step
    pub relative_tolerance: f64,
    /// Absolute error tolerance per step
    pub absolute_tolerance: f64,
    /// First trial step [s], defaults to a thousandth of the first sample interval
    #[serde(default)]
    pub initial_step: Option<f64>,
    /// Smallest step before the run is abandoned [s]
    pub min_step: f64,
    /// Step budget, accepted and rejected, for the whole run
    pub max_steps: usize,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            relative_tolerance: 1e-6,
            absolute_tolerance: 1e-9,
            initial_step: None,
            min_step: 1e-10,
            max_steps: 100_000,
        }
    }
}
