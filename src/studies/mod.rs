//! Parameter sweeps over the bike design, returning plain data for plotting
//! or reporting elsewhere.

mod acceleration;
mod axes;
mod cruise;

pub use acceleration::{acceleration_profiles, AccelerationProfile};
pub use axes::{geomspace, linspace};
pub use cruise::{
    cruise_efficiency_map, cruise_efficiency_vs_gear_ratio, energy_mileage_vs_speed,
    optimal_cruise_gear_ratio, EfficiencyMap, EfficiencyMapCell, EnergyMileage,
    GearRatioEfficiency, OptimalGearRatio,
};
