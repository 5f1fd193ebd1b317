use std::collections::HashMap;

use anyhow::{anyhow, Result};

use quoridor::{Action, GameState};

use crate::agents::{PathWalker, RandomAgent};
use crate::Agent;

pub type BoxedAgent = Box<dyn Agent<State = GameState, Action = Action>>;
pub type AgentFactory = Box<dyn Fn() -> BoxedAgent + Send + Sync>;

/// Explicit name → factory table for agent implementations. Agents are
/// registered deliberately; nothing is discovered by scanning. Factories are
/// also how the match runner replaces an agent whose worker was abandoned
/// after a timeout or crash.
#[derive(Default)]
pub struct AgentRegistry {
    factories: HashMap<String, AgentFactory>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the built-in reference agents.
    pub fn with_default_agents() -> Self {
        let mut registry = Self::new();
        registry.register("random", || Box::new(RandomAgent::new()));
        registry.register("walker", || Box::new(PathWalker));
        registry
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> BoxedAgent + Send + Sync + 'static,
    ) {
        self.factories.insert(name.into(), Box::new(factory));
    }

    pub fn factory(&self, name: &str) -> Result<&AgentFactory> {
        self.factories.get(name).ok_or_else(|| {
            anyhow!(
                "no agent named '{}' is registered (available: {})",
                name,
                self.names().join(", ")
            )
        })
    }

    pub fn create(&self, name: &str) -> Result<BoxedAgent> {
        Ok(self.factory(name)?())
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = AgentRegistry::with_default_agents();

        assert_eq!(registry.names(), vec!["random", "walker"]);
        assert_eq!(registry.create("walker").unwrap().name(), "walker");
        assert!(registry.create("mystery").is_err());
    }

    #[test]
    fn test_register_custom_agent() {
        let mut registry = AgentRegistry::with_default_agents();
        registry.register("seeded", || Box::new(RandomAgent::from_seed(7)));

        assert!(registry.create("seeded").is_ok());
        assert_eq!(registry.names(), vec!["random", "seeded", "walker"]);
    }
}
