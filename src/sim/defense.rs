use std::collections::{BTreeMap, BTreeSet};

/// Live per-city occupancy: which aliens are inside which city right now.
///
/// Both levels are keyed by name; adding an occupant under a name that is
/// already present overwrites (names are assumed unique). Sets belonging
/// to a destroyed city are retained after their occupants die; they
/// double as the record of who fell where.
#[derive(Debug, Clone, Default)]
pub struct CityDefense {
    occupants: BTreeMap<String, BTreeSet<String>>,
}

impl CityDefense {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `alien` inside `city`.
    pub fn enter(&mut self, city: &str, alien: &str) {
        self.occupants
            .entry(city.to_string())
            .or_default()
            .insert(alien.to_string());
    }

    /// Drop `alien` from `city`'s set, if recorded there.
    pub fn leave(&mut self, city: &str, alien: &str) {
        if let Some(garrison) = self.occupants.get_mut(city) {
            garrison.remove(alien);
        }
    }

    /// Names recorded in `city`, in sorted order.
    pub fn garrison(&self, city: &str) -> impl Iterator<Item = &str> {
        self.occupants
            .get(city)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn garrison_size(&self, city: &str) -> usize {
        self.occupants.get(city).map_or(0, BTreeSet::len)
    }

    /// `(city, occupant names)` pairs for every city with a non-empty
    /// record, in city name order.
    pub fn by_city(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.occupants
            .iter()
            .filter(|(_, garrison)| !garrison.is_empty())
            .map(|(city, garrison)| (city.as_str(), garrison))
    }
}
