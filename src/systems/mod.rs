mod integrator;
mod motor;
mod simulation;
mod steady_state;
mod vehicle;

pub use integrator::integrate;
pub use motor::solve_motor_state;
pub use simulation::LongitudinalSimulator;
pub use steady_state::{steady_state_performance, SteadyStateProblem};
pub use vehicle::{calculate_performance, required_operating_point, resistive_forces};
