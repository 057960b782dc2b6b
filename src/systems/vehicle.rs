use tracing::trace;

use crate::components::{
    MotorInputs, MotorState, PowerLimit, ResistiveForces, RoadConditions, VehiclePerformance,
    VehicleSpec,
};
use crate::utils::{Result, SimError};

/// Forces opposing motion at a road speed, independent of the drivetrain.
///
/// Drag uses the signed air speed `speed + headwind`, so a tailwind faster than
/// the vehicle pushes it forward.
pub fn resistive_forces(
    spec: &VehicleSpec,
    speed: f64,
    conditions: &RoadConditions,
) -> ResistiveForces {
    let env = &spec.environment;
    let weight = spec.mass * env.gravity;
    let incline = conditions.grade.atan();

    let air_speed = speed + conditions.headwind;

    ResistiveForces {
        gravity: weight * incline.sin(),
        rolling: weight * incline.cos() * env.rolling_resistance_coefficient,
        aerodynamic: 0.5 * env.air_density * air_speed * air_speed.abs() * env.drag_area,
    }
}

/// Longitudinal force balance at a road speed and throttle setting.
///
/// The motor is evaluated twice at the speed the wheel imposes: once against
/// the battery voltage ceiling and once against the throttle-scaled controller
/// current ceiling. Whichever gives less torque is what the drivetrain can
/// actually deliver.
pub fn calculate_performance(
    spec: &VehicleSpec,
    speed: f64,
    throttle: f64,
    conditions: &RoadConditions,
) -> Result<VehiclePerformance> {
    if !speed.is_finite() {
        return Err(SimError::InvalidParameter(format!(
            "speed must be finite, got {}",
            speed
        )));
    }
    if !(0.0..=1.0).contains(&throttle) {
        return Err(SimError::InvalidParameter(format!(
            "throttle must be within [0, 1], got {}",
            throttle
        )));
    }

    let motor_speed = spec.motor_speed(speed);

    let via_voltage = spec.motor.solve(
        &MotorInputs::new()
            .with_voltage(spec.max_voltage)
            .with_angular_speed(motor_speed),
    )?;
    let via_throttle = spec.motor.solve(
        &MotorInputs::new()
            .with_current(spec.max_current * throttle)
            .with_angular_speed(motor_speed),
    )?;

    let (motor_state, limit) = if via_voltage.torque > via_throttle.torque {
        (via_throttle, PowerLimit::Current)
    } else {
        (via_voltage, PowerLimit::Voltage)
    };

    let thrust = spec.wheel_force(motor_state.torque);
    let resistance = resistive_forces(spec, speed, conditions);
    let net_force = thrust - resistance.total();

    trace!(
        speed,
        throttle,
        ?limit,
        thrust,
        net_force,
        "vehicle force balance"
    );

    Ok(VehiclePerformance {
        speed,
        throttle,
        thrust,
        resistance,
        net_force,
        net_acceleration: net_force / spec.mass,
        motor_state,
        limit,
    })
}

/// Motor operating point that exactly balances the resistance at a road speed.
///
/// Skips the throttle model entirely: the wheel force is set equal to the total
/// resistance and the motor is solved from speed and torque. The result may
/// exceed the battery voltage or controller current; callers sweeping design
/// space compare it against those ceilings themselves.
pub fn required_operating_point(
    spec: &VehicleSpec,
    speed: f64,
    conditions: &RoadConditions,
) -> Result<MotorState> {
    let resistance = resistive_forces(spec, speed, conditions);
    spec.motor.solve(
        &MotorInputs::new()
            .with_angular_speed(spec.motor_speed(speed))
            .with_torque(spec.motor_torque_for_force(resistance.total())),
    )
}

impl VehicleSpec {
    /// Force balance at a road speed, see [`calculate_performance`].
    pub fn performance(
        &self,
        speed: f64,
        throttle: f64,
        conditions: &RoadConditions,
    ) -> Result<VehiclePerformance> {
        calculate_performance(self, speed, throttle, conditions)
    }
}
