use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::link::Link;

/// Generic named graph vertex.
///
/// Links are kept in insertion order, at most one per distinct neighbor;
/// the neighbor map resolves a link key to the neighboring node's name.
/// Neighbors are held as names, never as references; whoever owns the
/// nodes (e.g. [`World`](super::world::World)) resolves them at use time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    name: String,
    links: Vec<Link>,
    neighbors: BTreeMap<String, String>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: Vec::new(),
            neighbors: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Connect toward `other`, creating the canonical link for the pair.
    ///
    /// One-directional per call: the caller registers the symmetric
    /// direction on `other` to make the edge bidirectional. Returns the
    /// link so the caller can reuse it for the other side.
    pub fn connect(&mut self, other: &str) -> Link {
        let link = Link::between(&self.name, other);
        self.connect_via(link.clone(), other);
        link
    }

    /// Register `other` as reachable via `link`.
    ///
    /// Idempotent: if a link with the same key is already registered,
    /// both the link list and the neighbor map are left unchanged.
    pub fn connect_via(&mut self, link: Link, other: &str) {
        if !self.neighbors.contains_key(link.key()) {
            self.neighbors.insert(link.key().to_string(), other.to_string());
            self.links.push(link);
        }
    }

    /// Links in insertion order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Name of the node reachable via the given link key.
    pub fn neighbor(&self, key: &str) -> Option<&str> {
        self.neighbors.get(key).map(String::as_str)
    }

    /// `(link key, neighbor name)` pairs in link insertion order.
    pub fn neighbor_names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links
            .iter()
            .map(|link| (link.key(), self.neighbors[link.key()].as_str()))
    }
}
