mod config;
mod state;

pub use config::SteadyStateConfig;
pub use state::SteadyStateResult;
