pub mod cli;
pub mod flush;
pub mod input;
pub mod model;
pub mod scenario;
pub mod sim;

pub use model::{Agent, Alien, City, Link, Node, World};
pub use sim::{
    CityDefense, MoveOutcome, SimConfig, SimError, Simulation, SkipReason, Termination,
};
