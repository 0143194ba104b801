use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::link::Link;
use super::node::Node;
use super::world::World;

/// A city: a graph node with a permanent destroyed flag and a display
/// label per road.
///
/// Road labels are keyed by link key and carry no simulation meaning;
/// they only shape how the city renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    #[serde(flatten)]
    node: Node,
    destroyed: bool,
    road_labels: BTreeMap<String, String>,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: Node::new(name),
            destroyed: false,
            road_labels: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.node.name()
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// See [`Node::connect`].
    pub fn connect(&mut self, other: &str) -> Link {
        self.node.connect(other)
    }

    /// See [`Node::connect_via`].
    pub fn connect_via(&mut self, link: Link, other: &str) {
        self.node.connect_via(link, other);
    }

    pub fn links(&self) -> &[Link] {
        self.node.links()
    }

    pub fn neighbor(&self, key: &str) -> Option<&str> {
        self.node.neighbor(key)
    }

    /// `(link key, neighbor name)` pairs in road insertion order.
    pub fn neighbor_names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.node.neighbor_names()
    }

    pub fn set_road_label(&mut self, key: &str, label: impl Into<String>) {
        self.road_labels.insert(key.to_string(), label.into());
    }

    pub fn road_label(&self, key: &str) -> Option<&str> {
        self.road_labels.get(key).map(String::as_str)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Permanent and idempotent: once destroyed, a city never recovers.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// Render the city the way a map line reads: its name followed by
    /// `label=neighbor` for each road whose far end is still standing.
    /// Roads to destroyed neighbors are silently omitted, using the same
    /// standing test as the engine's movement filter.
    pub fn render(&self, world: &World) -> String {
        let mut out = self.name().to_string();
        for (key, neighbor) in self.neighbor_names() {
            if world.is_standing(neighbor) {
                let label = self.road_label(key).unwrap_or("road");
                out.push(' ');
                out.push_str(label);
                out.push('=');
                out.push_str(neighbor);
            }
        }
        out
    }
}
