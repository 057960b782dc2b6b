pub mod motor;
pub mod simulation;
pub mod steady_state;
pub mod vehicle;

pub use motor::{MotorInputs, MotorSpec, MotorState};
pub use simulation::{InitialCondition, SimulationResult, SimulationSample};
pub use steady_state::{SteadyStateConfig, SteadyStateResult};
pub use vehicle::{
    gear_ratio_from_reduction, gear_ratio_from_roller, EnvironmentConfig, PowerLimit,
    ResistiveForces, RidingPosition, RoadConditions, Surface, VehiclePerformance, VehicleSpec,
};
