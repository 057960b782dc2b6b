use tracing::trace;

use crate::components::{MotorInputs, MotorSpec, MotorState};
use crate::utils::{Result, SimError, MAX_RESOLUTION_PASSES};

/// Completes a motor operating point from exactly two known quantities.
///
/// The motor is described by two relations (SI units, `kv` in rad/s/V):
/// - `voltage = angular_speed / kv + current * resistance`
/// - `current = torque * kv + no_load_current`
///
/// Each pass solves whichever relation has a single unknown left, in either
/// direction. Every valid pair of knowns settles within `MAX_RESOLUTION_PASSES`.
///
/// # Errors
/// * `InvalidInputCount` - fewer or more than two quantities known.
/// * `IllPosedCombination` - current and torque given together.
/// * `InvalidParameter` - a known quantity is not finite.
pub fn solve_motor_state(spec: &MotorSpec, inputs: &MotorInputs) -> Result<MotorState> {
    let known = inputs.known_count();
    if known != 2 {
        return Err(SimError::InvalidInputCount(known));
    }
    if inputs.current.is_some() && inputs.torque.is_some() {
        return Err(SimError::IllPosedCombination);
    }
    for (name, value) in [
        ("voltage", inputs.voltage),
        ("current", inputs.current),
        ("angular_speed", inputs.angular_speed),
        ("torque", inputs.torque),
    ] {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(SimError::InvalidParameter(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
    }

    let kv = spec.kv_rad_per_sec_per_volt();
    let resistance = spec.resistance;
    let no_load_current = spec.no_load_current;

    let mut voltage = inputs.voltage;
    let mut current = inputs.current;
    let mut angular_speed = inputs.angular_speed;
    let mut torque = inputs.torque;

    for pass in 0..MAX_RESOLUTION_PASSES {
        // Back-EMF relation: voltage, current, angular speed
        match (voltage, current, angular_speed) {
            (None, Some(i), Some(w)) => voltage = Some(w / kv + i * resistance),
            (Some(v), None, Some(w)) => current = Some((v - w / kv) / resistance),
            (Some(v), Some(i), None) => angular_speed = Some((v - i * resistance) * kv),
            _ => {}
        }

        // Torque relation: current, torque
        match (current, torque) {
            (None, Some(t)) => current = Some(t * kv + no_load_current),
            (Some(i), None) => torque = Some((i - no_load_current) / kv),
            _ => {}
        }

        if let (Some(v), Some(i), Some(w), Some(t)) = (voltage, current, angular_speed, torque) {
            trace!(pass, voltage = v, current = i, angular_speed = w, torque = t, "motor state resolved");
            return Ok(MotorState::new(v, i, w, t));
        }
    }

    Err(SimError::IllPosedCombination)
}

impl MotorSpec {
    /// Completes an operating point, see [`solve_motor_state`].
    pub fn solve(&self, inputs: &MotorInputs) -> Result<MotorState> {
        solve_motor_state(self, inputs)
    }

    /// Operating point at the rated current under a supply voltage.
    ///
    /// With current pinned, torque is fixed and shaft power grows with speed, so
    /// the most power the motor can deliver continuously is where the supply
    /// voltage runs out. `heat_dissipation` of the result is the continuous
    /// heat load the motor must shed.
    pub fn rated_operating_point(&self, voltage: f64) -> Result<MotorState> {
        let rated_current = self.rated_current.ok_or_else(|| {
            SimError::InvalidParameter("motor has no rated current".to_string())
        })?;
        self.solve(
            &MotorInputs::new()
                .with_voltage(voltage)
                .with_current(rated_current),
        )
    }
}
