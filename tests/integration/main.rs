#[path = "../common/mod.rs"]
mod common;

mod config_tests;
mod motor_tests;
mod simulation_tests;
mod study_tests;
mod vehicle_tests;
