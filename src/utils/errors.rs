use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Motor solve needs exactly two known quantities, got {0}")]
    InvalidInputCount(usize),

    #[error("Current and torque together do not determine voltage or speed")]
    IllPosedCombination,

    #[error("No steady state at {speed:.3} m/s (residual acceleration {residual:.3e} m/s^2)")]
    NoSteadyStateFound { speed: f64, residual: f64 },

    #[error("Integration error: {0}")]
    IntegrationFailure(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
