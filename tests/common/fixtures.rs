use ebike::{
    components::{EnvironmentConfig, MotorSpec, RidingPosition, Surface, VehicleSpec},
    resources::SimulationConfig,
    studies::linspace,
};

/// The 149 kv motor from the friction-roller build
pub fn bike_motor() -> MotorSpec {
    MotorSpec::new(149.0, 0.043, 1.3).unwrap()
}

/// Friction-roller bike on asphalt, rider on the hoods
pub fn roller_bike() -> VehicleSpec {
    VehicleSpec::default()
}

/// Same bike tucked on aerobars on smooth concrete
pub fn aero_bike() -> VehicleSpec {
    VehicleSpec::default()
        .with_environment(EnvironmentConfig::new(Surface::Concrete, RidingPosition::Aerobars))
}

pub fn default_config() -> SimulationConfig {
    SimulationConfig::default()
}

/// Sample times every `step` seconds up to `end`
pub fn time_grid(end: f64, step: f64) -> Vec<f64> {
    linspace(0.0, end, (end / step).round() as usize + 1)
}
