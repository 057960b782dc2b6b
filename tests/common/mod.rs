mod assertions;
mod fixtures;

// Re-export
pub use assertions::{
    assert_motor_state_consistent, assert_samples_valid, assert_steady, assert_vehicle_balance,
};

pub use fixtures::*;
