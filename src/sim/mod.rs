mod defense;
pub mod names;
mod runner;

pub use defense::CityDefense;
pub use runner::{MoveOutcome, SimConfig, SimError, Simulation, SkipReason, Termination};
