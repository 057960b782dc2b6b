use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::utils::{Result, SimError};

/// Configuration for a brushless DC motor, described by its lumped constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorSpec {
    /// Speed constant, no-load speed per applied volt [rpm/V]
    pub kv: f64,
    /// Winding resistance [ohm]
    pub resistance: f64,
    /// Current drawn at zero output torque (friction and iron losses) [A]
    pub no_load_current: f64,
    /// Maximum continuous current [A]
    #[serde(default)]
    pub rated_current: Option<f64>,
}

impl Default for MotorSpec {
    /// The 149 kv outrunner used on the friction-drive bike.
    fn default() -> Self {
        Self {
            kv: 149.0,
            resistance: 0.043,
            no_load_current: 1.3,
            rated_current: Some(80.0),
        }
    }
}

impl MotorSpec {
    /// Creates a motor spec, rejecting constants that break the motor model.
    ///
    /// # Arguments
    /// * `kv` - Speed constant (rpm/V), strictly positive.
    /// * `resistance` - Winding resistance (ohm), strictly positive.
    /// * `no_load_current` - No-load current (A), non-negative.
    pub fn new(kv: f64, resistance: f64, no_load_current: f64) -> Result<Self> {
        let spec = Self {
            kv,
            resistance,
            no_load_current,
            rated_current: None,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn with_rated_current(mut self, rated_current: f64) -> Self {
        self.rated_current = Some(rated_current);
        self
    }

    /// The 110 kv hub motor from the first round of gear ratio studies.
    pub fn preliminary() -> Self {
        Self {
            kv: 110.0,
            resistance: 0.107,
            no_load_current: 0.7,
            rated_current: None,
        }
    }

    /// Speed constant in SI units [rad/s/V]
    #[inline]
    pub fn kv_rad_per_sec_per_volt(&self) -> f64 {
        self.kv * PI / 30.0
    }

    /// Torque constant, the inverse of the SI speed constant [N·m/A]
    #[inline]
    pub fn torque_constant(&self) -> f64 {
        1.0 / self.kv_rad_per_sec_per_volt()
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.kv.is_finite() && self.kv > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "kv must be positive, got {}",
                self.kv
            )));
        }
        if !(self.resistance.is_finite() && self.resistance > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "resistance must be positive, got {}",
                self.resistance
            )));
        }
        if !(self.no_load_current.is_finite() && self.no_load_current >= 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "no-load current must be non-negative, got {}",
                self.no_load_current
            )));
        }
        if let Some(rated) = self.rated_current {
            if !(rated.is_finite() && rated > 0.0) {
                return Err(SimError::InvalidParameter(format!(
                    "rated current must be positive, got {}",
                    rated
                )));
            }
        }
        Ok(())
    }
}
