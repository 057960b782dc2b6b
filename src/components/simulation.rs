use serde::{Deserialize, Serialize};

/// State at the start of an integration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialCondition {
    /// Start time [s]
    pub time: f64,
    /// Distance along the road [m]
    pub position: f64,
    /// Road speed [m/s]
    pub velocity: f64,
}

impl InitialCondition {
    pub fn at_rest() -> Self {
        Self::default()
    }

    pub fn rolling(velocity: f64) -> Self {
        Self {
            velocity,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSample {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
}

/// Samples of one integration run, ordered by time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    samples: Vec<SimulationSample>,
}

impl SimulationResult {
    pub(crate) fn new(samples: Vec<SimulationSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[SimulationSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&SimulationSample> {
        self.samples.last()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn positions(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.position).collect()
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.velocity).collect()
    }

    /// Highest speed reached over the run [m/s]
    pub fn max_velocity(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.velocity)
            .max_by(|a, b| a.total_cmp(b))
    }

    /// First sample time at which `speed` is reached, if it ever is
    pub fn time_to_speed(&self, speed: f64) -> Option<f64> {
        self.samples
            .iter()
            .find(|s| s.velocity >= speed)
            .map(|s| s.time)
    }
}

impl IntoIterator for SimulationResult {
    type Item = SimulationSample;
    type IntoIter = std::vec::IntoIter<SimulationSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}
