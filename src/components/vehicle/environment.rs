use serde::{Deserialize, Serialize};

use crate::utils::{GRAVITY, SEA_LEVEL_AIR_DENSITY};

/// Road surface, sets the rolling-resistance coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Concrete,
    Asphalt,
    Gravel,
    Grass,
    OffRoad,
    Sand,
}

impl Surface {
    /// Rolling-resistance coefficient Crr [-]
    pub fn rolling_resistance_coefficient(&self) -> f64 {
        match self {
            Surface::Concrete => 0.0020,
            Surface::Asphalt => 0.0050,
            Surface::Gravel => 0.0060,
            Surface::Grass => 0.0070,
            Surface::OffRoad => 0.0200,
            Surface::Sand => 0.0300,
        }
    }
}

/// Rider hand position on drop bars, sets the aerodynamic drag area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RidingPosition {
    Tops,
    Hoods,
    Drops,
    Aerobars,
}

impl RidingPosition {
    /// Drag coefficient times frontal area CdA [m^2]
    pub fn drag_area(&self) -> f64 {
        match self {
            RidingPosition::Tops => 0.408,
            RidingPosition::Hoods => 0.324,
            RidingPosition::Drops => 0.307,
            RidingPosition::Aerobars => 0.2914,
        }
    }
}

/// Environmental constants used by the resistive force model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Air density [kg/m^3]
    pub air_density: f64,
    /// Drag coefficient times frontal area [m^2]
    pub drag_area: f64,
    /// Rolling-resistance coefficient [-]
    pub rolling_resistance_coefficient: f64,
    /// Gravitational acceleration [m/s^2]
    pub gravity: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::new(Surface::Asphalt, RidingPosition::Hoods)
    }
}

impl EnvironmentConfig {
    /// Sea level air with the given surface and riding position
    pub fn new(surface: Surface, position: RidingPosition) -> Self {
        Self {
            air_density: SEA_LEVEL_AIR_DENSITY,
            drag_area: position.drag_area(),
            rolling_resistance_coefficient: surface.rolling_resistance_coefficient(),
            gravity: GRAVITY,
        }
    }
}

/// Conditions held constant over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadConditions {
    /// Rise over run, positive uphill [-]
    pub grade: f64,
    /// Air speed along the direction of travel, added to road speed [m/s]
    pub headwind: f64,
}

impl RoadConditions {
    pub fn new(grade: f64, headwind: f64) -> Self {
        Self { grade, headwind }
    }

    pub fn flat() -> Self {
        Self::default()
    }
}
