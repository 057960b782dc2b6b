pub const GRAVITY: f64 = 9.81; // m/s^2
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225; // kg/m^3

pub const LIPO_CELL_VOLTAGE: f64 = 3.7; // V, nominal

// Boundary conversions
pub const METERS_PER_MILE: f64 = 1609.344;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const METERS_PER_INCH: f64 = 0.0254;
pub const KG_PER_POUND: f64 = 0.453_592_37;
pub const JOULES_PER_WATT_HOUR: f64 = 3600.0;

// Motor solve resolution passes; every valid pair of knowns settles in at most this many
pub const MAX_RESOLUTION_PASSES: usize = 3;

// Steady state
pub const STEADY_STATE_TOLERANCE: f64 = 1e-6; // m/s^2
