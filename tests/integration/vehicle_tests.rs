use approx::assert_relative_eq;
use ebike::{
    components::{gear_ratio_from_roller, PowerLimit, RoadConditions, VehicleSpec},
    systems::{calculate_performance, resistive_forces},
};

use crate::common::{
    aero_bike, assert_motor_state_consistent, assert_vehicle_balance, roller_bike,
};

#[test]
fn test_stall_selects_current_branch() {
    let bike = roller_bike();
    assert_relative_eq!(bike.gear_ratio, gear_ratio_from_roller(0.083, 0.700));

    let perf = calculate_performance(&bike, 0.0, 1.0, &RoadConditions::flat()).unwrap();
    assert_eq!(perf.limit, PowerLimit::Current);
    assert_eq!(perf.resistance.aerodynamic, 0.0);
    assert_relative_eq!(perf.net_force, perf.thrust - perf.resistance.rolling, epsilon = 1e-12);
    assert_vehicle_balance(&perf, bike.mass);
    assert_motor_state_consistent(&bike.motor, &perf.motor_state);

    // About 5 N·m at the motor through the roller is roughly 120 N of thrust
    assert_relative_eq!(perf.motor_state.torque, 5.0438, epsilon = 1e-3);
    assert_relative_eq!(perf.thrust, 121.5, epsilon = 0.5);
}

#[test]
fn test_monotonic_over_speed_sweep() {
    for bike in [roller_bike(), aero_bike(), VehicleSpec::preliminary()] {
        let mut previous = f64::INFINITY;
        for i in 0..60 {
            let speed = 0.25 * i as f64;
            let perf =
                calculate_performance(&bike, speed, 1.0, &RoadConditions::flat()).unwrap();
            assert_vehicle_balance(&perf, bike.mass);
            assert!(perf.net_acceleration < previous);
            previous = perf.net_acceleration;
        }
    }
}

#[test]
fn test_aero_position_lowers_drag() {
    let hoods = resistive_forces(&roller_bike(), 10.0, &RoadConditions::flat());
    let tucked = resistive_forces(&aero_bike(), 10.0, &RoadConditions::flat());
    assert!(tucked.aerodynamic < hoods.aerodynamic);
    assert!(tucked.rolling < hoods.rolling);
}

#[test]
fn test_branches_agree_at_crossover() {
    let bike = roller_bike();
    let conditions = RoadConditions::flat();

    // Walk up to the speed where the voltage ceiling takes over
    let mut lo = 0.0;
    let mut hi = 13.0;
    for _ in 0..60 {
        let mid = 0.5 * (lo + hi);
        let perf = calculate_performance(&bike, mid, 1.0, &conditions).unwrap();
        if perf.limit == PowerLimit::Current {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let below = calculate_performance(&bike, lo, 1.0, &conditions).unwrap();
    let above = calculate_performance(&bike, hi, 1.0, &conditions).unwrap();
    assert_relative_eq!(below.thrust, above.thrust, max_relative = 1e-6);
    assert!(lo > 11.5 && lo < 12.5);
}
