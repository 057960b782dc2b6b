use approx::assert_relative_eq;
use ebike::{
    components::{MotorInputs, MotorSpec},
    utils::{rpm_to_rad_per_sec, SimError},
};

use crate::common::{assert_motor_state_consistent, bike_motor};

#[test]
fn test_thousand_rpm_ten_amps() {
    let motor = bike_motor();
    let state = motor
        .solve(
            &MotorInputs::new()
                .with_angular_speed(rpm_to_rad_per_sec(1000.0))
                .with_current(10.0),
        )
        .unwrap();

    assert_motor_state_consistent(&motor, &state);
    assert_relative_eq!(state.voltage, 7.141, epsilon = 1e-3);
    assert_relative_eq!(state.torque, 0.5575, epsilon = 1e-4);
}

#[test]
fn test_round_trip_from_any_pair() {
    for motor in [bike_motor(), MotorSpec::preliminary()] {
        for (voltage, speed) in [(22.2, 150.0), (44.4, 300.0), (12.0, 0.0), (5.0, 400.0)] {
            let reference = motor
                .solve(
                    &MotorInputs::new()
                        .with_voltage(voltage)
                        .with_angular_speed(speed),
                )
                .unwrap();
            assert_motor_state_consistent(&motor, &reference);
            assert!(reference.to_inputs().is_complete());

            let fields = [
                MotorInputs::new().with_voltage(reference.voltage),
                MotorInputs::new().with_current(reference.current),
                MotorInputs::new().with_angular_speed(reference.angular_speed),
                MotorInputs::new().with_torque(reference.torque),
            ];
            for i in 0..fields.len() {
                for j in (i + 1)..fields.len() {
                    let pair = MotorInputs {
                        voltage: fields[i].voltage.or(fields[j].voltage),
                        current: fields[i].current.or(fields[j].current),
                        angular_speed: fields[i].angular_speed.or(fields[j].angular_speed),
                        torque: fields[i].torque.or(fields[j].torque),
                    };

                    let result = motor.solve(&pair);
                    if pair.current.is_some() && pair.torque.is_some() {
                        assert!(matches!(result, Err(SimError::IllPosedCombination)));
                        continue;
                    }
                    let state = result.unwrap();
                    let close = |a: f64, b: f64| (a - b).abs() <= 1e-9 * b.abs().max(1.0);
                    assert!(close(state.voltage, reference.voltage));
                    assert!(close(state.current, reference.current));
                    assert!(close(state.angular_speed, reference.angular_speed));
                    assert!(close(state.torque, reference.torque));
                }
            }
        }
    }
}

#[test]
fn test_power_balance() {
    let motor = bike_motor();
    let state = motor
        .solve(&MotorInputs::new().with_voltage(22.2).with_current(30.0))
        .unwrap();

    assert_relative_eq!(
        state.electrical_power(),
        state.mechanical_power() + state.heat_dissipation(),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        state.efficiency,
        state.mechanical_power() / state.electrical_power(),
        max_relative = 1e-12
    );
}
