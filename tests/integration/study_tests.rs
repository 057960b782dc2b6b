use ebike::{
    studies::{
        acceleration_profiles, cruise_efficiency_vs_gear_ratio, energy_mileage_vs_speed,
        geomspace, linspace, optimal_cruise_gear_ratio,
    },
    utils::{mph_to_mps, SimError},
};
use pretty_assertions::assert_eq;

use crate::common::{assert_samples_valid, assert_steady, default_config, time_grid};

#[test]
fn test_gear_ratio_acceleration_sweep() {
    let config = default_config();
    let ratios = geomspace(0.020 / 0.700, 1.0, 10).unwrap();
    let profiles = acceleration_profiles(&config, &ratios, &time_grid(10.0, 0.5)).unwrap();

    assert_eq!(profiles.len(), 10);
    for profile in &profiles {
        assert_samples_valid(&profile.result);
    }
    let gear_ratios: Vec<f64> = profiles.iter().map(|p| p.gear_ratio).collect();
    assert_eq!(gear_ratios, ratios);

    // The tallest gearing tops out well below the stock roller
    let tallest = profiles.last().and_then(|p| p.final_velocity()).unwrap();
    let stock = acceleration_profiles(&config, &[config.vehicle.gear_ratio], &time_grid(10.0, 0.5))
        .unwrap()[0]
        .final_velocity()
        .unwrap();
    assert!(tallest < stock);
}

#[test]
fn test_optimum_is_in_the_efficient_band() {
    let config = default_config();
    let speed = mph_to_mps(15.0);
    let optimum = optimal_cruise_gear_ratio(&config, speed, (0.020 / 0.700, 1.0), 100).unwrap();
    assert_steady(&optimum.steady_state);

    let stock = cruise_efficiency_vs_gear_ratio(&config, &[config.vehicle.gear_ratio], speed)
        .unwrap()[0]
        .efficiency
        .unwrap();
    assert!(optimum.steady_state.efficiency() >= stock);
    assert!(optimum.gear_ratio > 0.1 && optimum.gear_ratio < 0.25);
}

#[test]
fn test_mileage_undefined_points() {
    let config = default_config();
    let speeds = linspace(0.0, 30.0, 31);
    let mileage = energy_mileage_vs_speed(&config, &speeds).unwrap();

    assert_eq!(mileage.len(), 31);
    assert_eq!(mileage[0].energy_per_distance, None);
    for point in &mileage[1..=12] {
        let wh = point.wh_per_mile.unwrap();
        assert!(wh > 0.0 && wh < 50.0, "{} Wh/mile at {} m/s", wh, point.speed);
    }
    for point in &mileage[15..] {
        assert_eq!(point.energy_per_distance, None);
    }
}

#[test]
fn test_sweep_rejects_bad_gear_ratio() {
    let config = default_config();
    assert!(matches!(
        cruise_efficiency_vs_gear_ratio(&config, &[-0.1], 5.0),
        Err(SimError::InvalidParameter(_))
    ));
}
