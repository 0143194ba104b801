use crate::model::{Alien, World};
use crate::sim::{SimConfig, Simulation};

/// Builder for hand-assembled invasion setups in tests: chain cities,
/// roads, and aliens, then `build()` the raw parts or go straight to a
/// [`Simulation`].
#[derive(Debug, Default)]
pub struct Scenario {
    world: World,
    aliens: Vec<Alien>,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a city exists (no-op when already present).
    pub fn city(mut self, name: &str) -> Self {
        self.ensure_city(name);
        self
    }

    /// Ensure both cities exist and connect them with a road labeled the
    /// same on both sides.
    pub fn road(mut self, a: &str, b: &str, label: &str) -> Self {
        self.ensure_city(a);
        self.ensure_city(b);
        let key = self.world.link_cities(a, b);
        self.world.get_mut(a).unwrap().set_road_label(&key, label);
        self.world.get_mut(b).unwrap().set_road_label(&key, label);
        self
    }

    /// Mark a city destroyed before the run starts.
    pub fn razed(mut self, name: &str) -> Self {
        self.ensure_city(name);
        self.world.get_mut(name).unwrap().destroy();
        self
    }

    /// Add an unplaced alien.
    pub fn alien(mut self, name: &str) -> Self {
        self.aliens.push(Alien::new(name));
        self
    }

    /// Add an alien pre-placed in a city (the city must have been added).
    pub fn alien_at(mut self, name: &str, city: &str) -> Self {
        assert!(self.world.contains(city), "alien_at: unknown city {city}");
        let mut alien = Alien::new(name);
        alien.invade_city(city);
        self.aliens.push(alien);
        self
    }

    pub fn build(self) -> (World, Vec<Alien>) {
        (self.world, self.aliens)
    }

    pub fn into_simulation(self, config: SimConfig) -> Simulation {
        Simulation::new(config, self.world, self.aliens)
    }

    fn ensure_city(&mut self, name: &str) {
        if !self.world.contains(name) {
            self.world.add_new_city(name);
        }
    }
}
