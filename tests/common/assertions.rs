use approx::assert_relative_eq;
use ebike::{
    components::{MotorSpec, MotorState, SimulationResult, SteadyStateResult, VehiclePerformance},
    utils::STEADY_STATE_TOLERANCE,
};

/// Assert that a motor state satisfies both governing relations
#[track_caller]
pub fn assert_motor_state_consistent(spec: &MotorSpec, state: &MotorState) {
    let kv = spec.kv_rad_per_sec_per_volt();

    assert!(state.voltage.is_finite(), "Voltage is not finite");
    assert!(state.current.is_finite(), "Current is not finite");
    assert!(state.angular_speed.is_finite(), "Angular speed is not finite");
    assert!(state.torque.is_finite(), "Torque is not finite");

    assert_relative_eq!(
        state.voltage,
        state.angular_speed / kv + state.current * spec.resistance,
        epsilon = 1e-9,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        state.current,
        state.torque * kv + spec.no_load_current,
        epsilon = 1e-9,
        max_relative = 1e-9
    );
}

/// Assert that the net force is thrust less the resistance breakdown
#[track_caller]
pub fn assert_vehicle_balance(perf: &VehiclePerformance, mass: f64) {
    assert_relative_eq!(
        perf.net_force,
        perf.thrust - perf.resistance.total(),
        epsilon = 1e-9
    );
    assert_relative_eq!(perf.net_acceleration, perf.net_force / mass, epsilon = 1e-12);
}

/// Assert that a steady-state result really holds its speed
#[track_caller]
pub fn assert_steady(result: &SteadyStateResult) {
    assert!(
        (0.0..=1.0).contains(&result.throttle),
        "Throttle {} outside [0, 1]",
        result.throttle
    );
    assert!(
        result.residual().abs() <= STEADY_STATE_TOLERANCE,
        "Residual acceleration {} above tolerance",
        result.residual()
    );
}

/// Assert that samples are finite and ordered in time
#[track_caller]
pub fn assert_samples_valid(result: &SimulationResult) {
    for sample in result.samples() {
        assert!(sample.position.is_finite(), "Position is not finite");
        assert!(sample.velocity.is_finite(), "Velocity is not finite");
    }
    for pair in result.samples().windows(2) {
        assert!(pair[1].time >= pair[0].time, "Samples out of order");
    }
}
