use serde::{Deserialize, Serialize};

/// Generic named mobile agent: an identity plus the name of the node it
/// currently occupies, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    name: String,
    location: Option<String>,
}

impl Agent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Name of the node the agent occupies, or `None` before its first
    /// placement.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn move_to(&mut self, node: impl Into<String>) {
        self.location = Some(node.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_nowhere() {
        let agent = Agent::new("Zorblax");
        assert_eq!(agent.location(), None);
    }

    #[test]
    fn move_to_replaces_location() {
        let mut agent = Agent::new("Zorblax");
        agent.move_to("Foo");
        agent.move_to("Bar");
        assert_eq!(agent.location(), Some("Bar"));
    }
}
