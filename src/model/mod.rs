pub mod agent;
pub mod alien;
pub mod city;
pub mod link;
pub mod node;
pub mod world;

pub use agent::Agent;
pub use alien::Alien;
pub use city::City;
pub use link::Link;
pub use node::Node;
pub use world::World;
