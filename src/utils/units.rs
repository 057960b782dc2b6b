//! Conversions applied at the boundary, before values enter the core.
//! Everything inside the crate is SI: m, s, kg, rad, V, A, N·m.

use std::f64::consts::PI;

use super::constants::{
    JOULES_PER_WATT_HOUR, KG_PER_POUND, LIPO_CELL_VOLTAGE, METERS_PER_INCH, METERS_PER_MILE,
    SECONDS_PER_HOUR,
};

/// Convert miles per hour to meters per second
#[inline]
pub fn mph_to_mps(mph: f64) -> f64 {
    mph * METERS_PER_MILE / SECONDS_PER_HOUR
}

/// Convert meters per second to miles per hour
#[inline]
pub fn mps_to_mph(mps: f64) -> f64 {
    mps * SECONDS_PER_HOUR / METERS_PER_MILE
}

/// Convert revolutions per minute to radians per second
#[inline]
pub fn rpm_to_rad_per_sec(rpm: f64) -> f64 {
    rpm * PI / 30.0
}

/// Convert radians per second to revolutions per minute
#[inline]
pub fn rad_per_sec_to_rpm(rad_per_sec: f64) -> f64 {
    rad_per_sec * 30.0 / PI
}

#[inline]
pub fn inches_to_meters(inches: f64) -> f64 {
    inches * METERS_PER_INCH
}

#[inline]
pub fn millimeters_to_meters(mm: f64) -> f64 {
    mm / 1000.0
}

#[inline]
pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_POUND
}

/// Energy mileage: J/m to Wh/mile
#[inline]
pub fn joules_per_meter_to_wh_per_mile(joules_per_meter: f64) -> f64 {
    joules_per_meter / JOULES_PER_WATT_HOUR * METERS_PER_MILE
}

/// Nominal pack voltage of a lithium polymer pack with `cells` cells in series
#[inline]
pub fn lipo_pack_voltage(cells: u32) -> f64 {
    cells as f64 * LIPO_CELL_VOLTAGE
}
