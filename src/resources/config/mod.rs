pub mod integrator;
pub mod simulation;

pub use integrator::IntegratorConfig;
pub use simulation::SimulationConfig;
