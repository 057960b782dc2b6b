mod config;
mod environment;
mod performance;

pub use config::{gear_ratio_from_reduction, gear_ratio_from_roller, VehicleSpec};
pub use environment::{EnvironmentConfig, RidingPosition, RoadConditions, Surface};
pub use performance::{PowerLimit, ResistiveForces, VehiclePerformance};
