pub mod components;
pub mod resources;
pub mod studies;
pub mod systems;
pub mod utils;

pub use components::{
    InitialCondition, MotorInputs, MotorSpec, MotorState, RoadConditions, SimulationResult,
    SteadyStateConfig, SteadyStateResult, VehiclePerformance, VehicleSpec,
};
pub use resources::{IntegratorConfig, SimulationConfig};
pub use systems::{
    calculate_performance, solve_motor_state, steady_state_performance, LongitudinalSimulator,
};
pub use utils::{Result, SimError};
