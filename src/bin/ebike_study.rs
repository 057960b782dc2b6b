use std::env;

use ebike::{
    components::InitialCondition,
    resources::SimulationConfig,
    studies::{
        acceleration_profiles, cruise_efficiency_vs_gear_ratio, energy_mileage_vs_speed,
        geomspace, linspace, optimal_cruise_gear_ratio,
    },
    systems::LongitudinalSimulator,
    utils::{mph_to_mps, mps_to_mph},
};
use tracing::{error, info, Level};

const CRUISE_SPEED_MPH: f64 = 15.0;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading configuration");
            SimulationConfig::load(&path)?
        }
        None => {
            info!("no configuration given, using the default bike");
            SimulationConfig::default()
        }
    };

    let wheel = config.vehicle.wheel_diameter;
    let gear_ratios = geomspace(0.020 / wheel, 1.0, 10)?;
    let t_eval = linspace(0.0, 10.0, 101);
    let cruise_speed = mph_to_mps(CRUISE_SPEED_MPH);

    let simulator = LongitudinalSimulator::from_config(&config);
    let launch = simulator.simulate(&t_eval, InitialCondition::at_rest())?;
    let cruise = simulator.steady_state_performance(cruise_speed)?;
    info!(
        throttle = cruise.throttle,
        efficiency = cruise.efficiency(),
        "cruise at {} mph",
        CRUISE_SPEED_MPH
    );

    let profiles = acceleration_profiles(&config, &gear_ratios, &t_eval)?;
    let efficiency_sweep = cruise_efficiency_vs_gear_ratio(
        &config,
        &geomspace(0.020 / wheel, 1.0, 60)?,
        cruise_speed,
    )?;
    let optimum = optimal_cruise_gear_ratio(&config, cruise_speed, (0.020 / wheel, 1.0), 100)?;
    let mileage = energy_mileage_vs_speed(&config, &linspace(0.0, 30.0, 61))?;

    let report = serde_json::json!({
        "config": config,
        "launch": {
            "samples": launch,
            "time_to_15_mph": launch.time_to_speed(cruise_speed),
            "final_speed_mph": launch.last().map(|s| mps_to_mph(s.velocity)),
        },
        "cruise": cruise,
        "acceleration_profiles": profiles,
        "efficiency_vs_gear_ratio": efficiency_sweep,
        "optimal_gear_ratio": optimum,
        "energy_mileage": mileage,
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    if let Err(ref e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
