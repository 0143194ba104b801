use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::city::City;
use super::link::Link;

/// The named collection of all cities.
///
/// Sole owner of every [`City`]; everything else in the crate refers to
/// cities by name and resolves them here. The `BTreeMap` keeps every
/// iteration over cities in lexicographic name order, which the engine's
/// reproducibility contract depends on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    cities: BTreeMap<String, City>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a city, overwriting any existing entry with the same name.
    pub fn add_city(&mut self, city: City) -> &mut City {
        let name = city.name().to_string();
        self.cities.insert(name.clone(), city);
        self.cities.get_mut(&name).unwrap_or_else(|| panic!("add_city: {name} vanished"))
    }

    /// Insert a fresh city with the given name.
    pub fn add_new_city(&mut self, name: &str) -> &mut City {
        self.add_city(City::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut City> {
        self.cities.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities in lexicographic name order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    /// True if the city exists and has not been destroyed.
    pub fn is_standing(&self, name: &str) -> bool {
        self.cities.get(name).is_some_and(|c| !c.is_destroyed())
    }

    /// Names of undestroyed cities, lexicographically sorted.
    pub fn standing_city_names(&self) -> Vec<&str> {
        self.cities
            .values()
            .filter(|c| !c.is_destroyed())
            .map(|c| c.name())
            .collect()
    }

    /// Register the canonical link on both endpoint cities, making the
    /// road bidirectional. Both cities must already exist. Returns the
    /// link key for road labeling.
    ///
    /// # Panics
    /// Panics if either city is missing from the world.
    pub fn link_cities(&mut self, a: &str, b: &str) -> String {
        let link = Link::between(a, b);
        let key = link.key().to_string();
        let first = self
            .cities
            .get_mut(a)
            .unwrap_or_else(|| panic!("link_cities: unknown city {a}"));
        first.connect_via(link.clone(), b);
        let second = self
            .cities
            .get_mut(b)
            .unwrap_or_else(|| panic!("link_cities: unknown city {b}"));
        second.connect_via(link, a);
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_city_overwrites_same_name() {
        let mut world = World::new();
        world.add_new_city("Foo").connect("Bar");
        assert_eq!(world.get("Foo").unwrap().links().len(), 1);

        // A second add under the same name replaces the city wholesale.
        world.add_new_city("Foo");
        assert_eq!(world.get("Foo").unwrap().links().len(), 0);
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn link_cities_registers_both_sides() {
        let mut world = World::new();
        world.add_new_city("Foo");
        world.add_new_city("Bar");
        let key = world.link_cities("Foo", "Bar");
        assert_eq!(world.get("Foo").unwrap().neighbor(&key), Some("Bar"));
        assert_eq!(world.get("Bar").unwrap().neighbor(&key), Some("Foo"));
    }

    #[test]
    fn standing_names_sorted_and_filtered() {
        let mut world = World::new();
        for name in ["Delta", "Alpha", "Charlie", "Bravo"] {
            world.add_new_city(name);
        }
        world.get_mut("Charlie").unwrap().destroy();
        assert_eq!(world.standing_city_names(), vec!["Alpha", "Bravo", "Delta"]);
        assert!(!world.is_standing("Charlie"));
        assert!(!world.is_standing("Echo"));
    }
}
