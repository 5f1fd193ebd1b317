use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct MatchOptions {
    pub num_games: usize,
    pub move_timeout_ms: u64,
    pub visualise: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            num_games: 2,
            move_timeout_ms: 2000,
            visualise: false,
        }
    }
}

impl Config for MatchOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            num_games: config.get_usize("num_games").unwrap_or(defaults.num_games),
            move_timeout_ms: config
                .get_usize("move_timeout_ms")
                .map(|v| v as u64)
                .unwrap_or(defaults.move_timeout_ms),
            visualise: config.get_bool("visualise").unwrap_or(defaults.visualise),
        })
    }
}
