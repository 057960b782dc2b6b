pub mod config;

pub use config::{IntegratorConfig, SimulationConfig};
