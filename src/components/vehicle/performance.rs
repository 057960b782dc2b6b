use serde::{Deserialize, Serialize};

use crate::components::MotorState;

/// Which electrical ceiling set the realizable torque
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerLimit {
    /// Battery voltage ceiling, binds near top speed
    Voltage,
    /// Controller current ceiling scaled by throttle, binds at low speed
    Current,
}

/// Forces opposing motion, each positive when acting against forward travel [N]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResistiveForces {
    pub gravity: f64,
    pub rolling: f64,
    pub aerodynamic: f64,
}

impl ResistiveForces {
    pub fn total(&self) -> f64 {
        self.gravity + self.rolling + self.aerodynamic
    }
}

/// Longitudinal force balance at one road speed and throttle setting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehiclePerformance {
    /// Road speed the balance was evaluated at [m/s]
    pub speed: f64,
    /// Throttle setting [0-1]
    pub throttle: f64,
    /// Propulsive force at the contact patch [N]
    pub thrust: f64,
    pub resistance: ResistiveForces,
    /// Thrust minus total resistance [N]
    pub net_force: f64,
    /// Net force over mass [m/s^2]
    pub net_acceleration: f64,
    /// The realizable motor operating point
    pub motor_state: MotorState,
    pub limit: PowerLimit,
}

impl VehiclePerformance {
    /// Drivetrain efficiency at this point, taken from the motor
    pub fn efficiency(&self) -> f64 {
        self.motor_state.efficiency
    }
}
