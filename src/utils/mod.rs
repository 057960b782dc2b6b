pub mod constants;
pub mod errors;
pub mod units;

pub use constants::*;
pub use errors::*;
pub use units::*;
