use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::world::World;

/// An invading alien: a generic mobile agent with a permanent dead flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alien {
    #[serde(flatten)]
    agent: Agent,
    dead: bool,
}

impl Alien {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            agent: Agent::new(name),
            dead: false,
        }
    }

    pub fn name(&self) -> &str {
        self.agent.name()
    }

    /// Give the alien a new name (intel identification).
    pub fn rename(&mut self, name: impl Into<String>) {
        self.agent.rename(name);
    }

    /// Occupy `city`, replacing any previous occupation.
    ///
    /// Performs no validation; the engine only ever calls this with a
    /// standing city, and pre-placement callers vouch for their input.
    pub fn invade_city(&mut self, city: &str) {
        self.agent.move_to(city);
    }

    /// Name of the city the alien occupies, or `None` before its first
    /// placement.
    pub fn city(&self) -> Option<&str> {
        self.agent.location()
    }

    /// True once the alien has occupied any city.
    pub fn is_invading(&self) -> bool {
        self.agent.location().is_some()
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Permanent and idempotent.
    pub fn kill(&mut self) {
        self.dead = true;
    }

    /// True when every road out of the current city leads to a destroyed
    /// city; a city with no roads traps trivially. Not invading means not
    /// trapped. Recomputed from the world on every call, never stored.
    pub fn is_trapped(&self, world: &World) -> bool {
        let Some(name) = self.city() else {
            return false;
        };
        let Some(city) = world.get(name) else {
            return true;
        };
        city.neighbor_names().all(|(_, neighbor)| !world.is_standing(neighbor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_city_world() -> World {
        let mut world = World::new();
        world.add_new_city("Foo");
        world.add_new_city("Bar");
        world.link_cities("Foo", "Bar");
        world
    }

    #[test]
    fn kill_is_permanent_and_idempotent() {
        let mut alien = Alien::new("Zorblax");
        assert!(!alien.is_dead());
        alien.kill();
        alien.kill();
        assert!(alien.is_dead());
    }

    #[test]
    fn invade_city_sets_association() {
        let mut alien = Alien::new("Zorblax");
        assert!(!alien.is_invading());
        alien.invade_city("Foo");
        assert!(alien.is_invading());
        assert_eq!(alien.city(), Some("Foo"));
    }

    #[test]
    fn not_invading_is_not_trapped() {
        let world = two_city_world();
        let alien = Alien::new("Zorblax");
        assert!(!alien.is_trapped(&world));
    }

    #[test]
    fn trapped_when_all_neighbors_destroyed() {
        let mut world = two_city_world();
        let mut alien = Alien::new("Zorblax");
        alien.invade_city("Foo");
        assert!(!alien.is_trapped(&world));

        world.get_mut("Bar").unwrap().destroy();
        assert!(alien.is_trapped(&world));
    }

    #[test]
    fn isolated_city_traps_trivially() {
        let mut world = World::new();
        world.add_new_city("Lonely");
        let mut alien = Alien::new("Zorblax");
        alien.invade_city("Lonely");
        assert!(alien.is_trapped(&world));
    }
}
