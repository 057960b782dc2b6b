mod config;
mod state;

pub use config::MotorSpec;
pub use state::{MotorInputs, MotorState};
