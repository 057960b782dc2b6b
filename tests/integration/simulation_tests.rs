use approx::assert_relative_eq;
use ebike::{
    components::{InitialCondition, RoadConditions},
    systems::LongitudinalSimulator,
    utils::{mph_to_mps, SimError},
};

use crate::common::{assert_samples_valid, assert_steady, default_config, roller_bike, time_grid};

#[test]
fn test_launch_from_rest() {
    let config = default_config();
    let result = LongitudinalSimulator::from_config(&config)
        .simulate(&time_grid(10.0, 0.1), InitialCondition::at_rest())
        .unwrap();

    assert_samples_valid(&result);
    assert_eq!(result.len(), 101);
    assert_eq!(result.samples()[0].velocity, 0.0);

    let time_to_cruise = result.time_to_speed(mph_to_mps(15.0)).unwrap();
    assert!(time_to_cruise > 3.0 && time_to_cruise < 7.0);
}

#[test]
fn test_position_is_integral_of_velocity() {
    let bike = roller_bike();
    let result = LongitudinalSimulator::new(&bike)
        .simulate(&time_grid(5.0, 0.01), InitialCondition::at_rest())
        .unwrap();

    // Trapezoidal area under the sampled velocity
    let samples = result.samples();
    let distance: f64 = samples
        .windows(2)
        .map(|w| 0.5 * (w[0].velocity + w[1].velocity) * (w[1].time - w[0].time))
        .sum();
    assert_relative_eq!(result.last().unwrap().position, distance, max_relative = 1e-4);
}

#[test]
fn test_offset_initial_condition() {
    let bike = roller_bike();
    let initial = InitialCondition {
        time: 2.0,
        position: 100.0,
        velocity: 5.0,
    };
    let result = LongitudinalSimulator::new(&bike)
        .simulate(&[2.0, 3.0, 4.0], initial)
        .unwrap();

    let first = result.samples()[0];
    assert_eq!(first.time, 2.0);
    assert_eq!(first.position, 100.0);
    assert!(result.last().unwrap().position > 105.0);
}

#[test]
fn test_samples_before_start_rejected() {
    let bike = roller_bike();
    let initial = InitialCondition {
        time: 0.5,
        ..InitialCondition::at_rest()
    };
    let result = LongitudinalSimulator::new(&bike).simulate(&[0.0, 1.0], initial);
    assert!(matches!(result, Err(SimError::InvalidParameter(_))));
}

#[test]
fn test_steady_state_at_fifteen_mph() {
    let bike = roller_bike();
    let result = LongitudinalSimulator::new(&bike)
        .steady_state_performance(mph_to_mps(15.0))
        .unwrap();

    assert_steady(&result);
    assert_relative_eq!(result.throttle, 0.12, epsilon = 0.02);
    assert_relative_eq!(result.efficiency(), 0.83, epsilon = 0.02);
}

#[test]
fn test_steady_state_above_top_speed() {
    let bike = roller_bike();
    let simulator = LongitudinalSimulator::new(&bike);
    assert!(matches!(
        simulator.steady_state_performance(20.0),
        Err(SimError::NoSteadyStateFound { .. })
    ));

    // A stiff headwind brings the ceiling down further
    let into_wind = simulator.with_conditions(RoadConditions::new(0.0, 8.0));
    assert!(matches!(
        into_wind.steady_state_performance(13.0),
        Err(SimError::NoSteadyStateFound { .. })
    ));
}
