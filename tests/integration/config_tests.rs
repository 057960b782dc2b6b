use ebike::{
    components::{RoadConditions, VehicleSpec},
    resources::SimulationConfig,
    systems::LongitudinalSimulator,
    utils::SimError,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_yaml_file_drives_simulator() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
vehicle:
  motor:
    kv: 110.0
    resistance: 0.107
    no_load_current: 0.7
  gear_ratio: 0.18181818181818182
  wheel_diameter: 0.508
  max_voltage: 44.4
  max_current: 40.0
  mass: 77.11
conditions:
  grade: 0.05
  headwind: 0.0
"#
    )?;

    let config = SimulationConfig::load(file.path())?;
    assert_eq!(config.conditions, RoadConditions::new(0.05, 0.0));
    assert_eq!(config.vehicle.motor, VehicleSpec::preliminary().motor);

    let climb = LongitudinalSimulator::from_config(&config).steady_state_performance(5.0)?;
    let flat = LongitudinalSimulator::from_config(&config)
        .with_conditions(RoadConditions::flat())
        .steady_state_performance(5.0)?;
    assert!(climb.throttle > flat.throttle);
    Ok(())
}

#[test]
fn test_round_trip_through_file() -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulationConfig {
        vehicle: VehicleSpec::preliminary(),
        ..SimulationConfig::default()
    };
    let file = NamedTempFile::new()?;
    config.save(file.path())?;
    assert_eq!(SimulationConfig::load(file.path())?, config);
    Ok(())
}

#[test]
fn test_negative_mass_rejected() {
    let yaml = r#"
vehicle:
  motor:
    kv: 149.0
    resistance: 0.043
    no_load_current: 1.3
  gear_ratio: 0.1
  wheel_diameter: 0.7
  max_voltage: 22.2
  max_current: 80.0
  mass: -80.0
"#;
    assert!(matches!(
        SimulationConfig::from_yaml_str(yaml),
        Err(SimError::InvalidConfig(_))
    ));
}
