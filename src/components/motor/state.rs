use serde::{Deserialize, Serialize};

use crate::utils::rad_per_sec_to_rpm;

/// A partially specified operating point. Exactly two fields must be known
/// before the motor model can complete it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MotorInputs {
    /// Terminal voltage [V]
    pub voltage: Option<f64>,
    /// Winding current [A]
    pub current: Option<f64>,
    /// Shaft speed [rad/s]
    pub angular_speed: Option<f64>,
    /// Shaft torque [N·m]
    pub torque: Option<f64>,
}

impl MotorInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_voltage(mut self, voltage: f64) -> Self {
        self.voltage = Some(voltage);
        self
    }

    pub fn with_current(mut self, current: f64) -> Self {
        self.current = Some(current);
        self
    }

    pub fn with_angular_speed(mut self, angular_speed: f64) -> Self {
        self.angular_speed = Some(angular_speed);
        self
    }

    pub fn with_torque(mut self, torque: f64) -> Self {
        self.torque = Some(torque);
        self
    }

    /// Number of quantities marked known
    pub fn known_count(&self) -> usize {
        [
            self.voltage.is_some(),
            self.current.is_some(),
            self.angular_speed.is_some(),
            self.torque.is_some(),
        ]
        .iter()
        .filter(|known| **known)
        .count()
    }

    pub fn is_complete(&self) -> bool {
        self.known_count() == 4
    }
}

/// A fully resolved motor operating point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorState {
    /// Terminal voltage [V]
    pub voltage: f64,
    /// Winding current [A]
    pub current: f64,
    /// Shaft speed [rad/s]
    pub angular_speed: f64,
    /// Shaft torque [N·m]
    pub torque: f64,
    /// Mechanical power out over electrical power in, 0 when no electrical power flows
    pub efficiency: f64,
}

impl MotorState {
    pub fn new(voltage: f64, current: f64, angular_speed: f64, torque: f64) -> Self {
        let mechanical_power = angular_speed * torque;
        let electrical_power = voltage * current;
        let efficiency = if electrical_power == 0.0 {
            0.0
        } else {
            mechanical_power / electrical_power
        };

        Self {
            voltage,
            current,
            angular_speed,
            torque,
            efficiency,
        }
    }

    /// Shaft speed [rpm]
    pub fn rpm(&self) -> f64 {
        rad_per_sec_to_rpm(self.angular_speed)
    }

    /// Shaft power [W]
    pub fn mechanical_power(&self) -> f64 {
        self.angular_speed * self.torque
    }

    /// Power drawn from the supply [W]
    pub fn electrical_power(&self) -> f64 {
        self.voltage * self.current
    }

    /// Power lost inside the motor as heat (copper plus no-load losses) [W]
    pub fn heat_dissipation(&self) -> f64 {
        self.electrical_power() - self.mechanical_power()
    }

    /// Inputs with every quantity known
    pub fn to_inputs(&self) -> MotorInputs {
        MotorInputs {
            voltage: Some(self.voltage),
            current: Some(self.current),
            angular_speed: Some(self.angular_speed),
            torque: Some(self.torque),
        }
    }
}
