use serde::{Deserialize, Serialize};

use super::environment::EnvironmentConfig;
use crate::components::MotorSpec;
use crate::utils::{
    lipo_pack_voltage, millimeters_to_meters, pounds_to_kg, Result, SimError,
};

/// The full vehicle configuration: drivetrain, electrical limits, mass and environment.
///
/// `gear_ratio` is wheel angular speed per motor angular speed, so a reduction
/// drive has a ratio below one. The motor spins at `wheel_speed / gear_ratio`
/// and the wheel sees `motor_torque / gear_ratio`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub motor: MotorSpec,
    /// Wheel speed per motor speed [-]
    pub gear_ratio: f64,
    /// Driven wheel outer diameter [m]
    pub wheel_diameter: f64,
    /// Battery voltage ceiling [V]
    pub max_voltage: f64,
    /// Controller current ceiling at full throttle [A]
    pub max_current: f64,
    /// Total mass, vehicle plus rider [kg]
    pub mass: f64,
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

impl Default for VehicleSpec {
    /// Friction-roller drive: 83 mm roller on a 700 mm wheel, 6S pack, 80 A controller.
    fn default() -> Self {
        Self {
            motor: MotorSpec::default(),
            gear_ratio: gear_ratio_from_roller(0.083, 0.700),
            wheel_diameter: 0.700,
            max_voltage: lipo_pack_voltage(6),
            max_current: 80.0,
            mass: 80.0,
            environment: EnvironmentConfig::default(),
        }
    }
}

impl VehicleSpec {
    /// First-round design: 110 kv motor on a 5.5:1 reduction, 12S pack, 40 A,
    /// 508 mm tire and a 170 lb all-up mass.
    pub fn preliminary() -> Self {
        Self {
            motor: MotorSpec::preliminary(),
            gear_ratio: gear_ratio_from_reduction(5.5),
            wheel_diameter: millimeters_to_meters(508.0),
            max_voltage: lipo_pack_voltage(12),
            max_current: 40.0,
            mass: pounds_to_kg(170.0),
            environment: EnvironmentConfig {
                drag_area: 0.4,
                rolling_resistance_coefficient: 0.008,
                ..EnvironmentConfig::default()
            },
        }
    }

    /// Same vehicle with a different gear ratio, for sweeps
    pub fn with_gear_ratio(mut self, gear_ratio: f64) -> Self {
        self.gear_ratio = gear_ratio;
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentConfig) -> Self {
        self.environment = environment;
        self
    }

    #[inline]
    pub fn wheel_radius(&self) -> f64 {
        self.wheel_diameter / 2.0
    }

    /// Motor shaft speed for a given road speed [rad/s]
    #[inline]
    pub fn motor_speed(&self, road_speed: f64) -> f64 {
        road_speed / self.wheel_radius() / self.gear_ratio
    }

    /// Tractive force at the contact patch for a given motor torque [N]
    #[inline]
    pub fn wheel_force(&self, motor_torque: f64) -> f64 {
        motor_torque / self.gear_ratio / self.wheel_radius()
    }

    /// Motor torque needed to put a given tractive force on the road [N·m]
    #[inline]
    pub fn motor_torque_for_force(&self, wheel_force: f64) -> f64 {
        wheel_force * self.wheel_radius() * self.gear_ratio
    }

    pub fn validate(&self) -> Result<()> {
        self.motor.validate()?;

        let positive = [
            ("gear_ratio", self.gear_ratio),
            ("wheel_diameter", self.wheel_diameter),
            ("max_voltage", self.max_voltage),
            ("mass", self.mass),
            ("gravity", self.environment.gravity),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidParameter(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("max_current", self.max_current),
            ("air_density", self.environment.air_density),
            ("drag_area", self.environment.drag_area),
            (
                "rolling_resistance_coefficient",
                self.environment.rolling_resistance_coefficient,
            ),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimError::InvalidParameter(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Gear ratio for a reduction quoted as motor turns per wheel turn (e.g. 5.5:1)
pub fn gear_ratio_from_reduction(reduction: f64) -> f64 {
    1.0 / reduction
}

/// Gear ratio for a friction roller driving the tire directly
pub fn gear_ratio_from_roller(roller_diameter: f64, wheel_diameter: f64) -> f64 {
    roller_diameter / wheel_diameter
}
