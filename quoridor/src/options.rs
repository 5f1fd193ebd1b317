use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

/// Parameters fixed for the lifetime of one game.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameOptions {
    pub board_size: u8,
    pub walls_per_player: u8,
    pub max_moves: usize,
}

impl GameOptions {
    pub fn new(board_size: u8, walls_per_player: u8) -> Self {
        Self {
            board_size,
            walls_per_player,
            ..Self::default()
        }
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            board_size: 9,
            walls_per_player: 10,
            max_moves: 250,
        }
    }
}

impl Config for GameOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            board_size: config
                .get_usize("board_size")
                .map(|v| v as u8)
                .unwrap_or(defaults.board_size),
            walls_per_player: config
                .get_usize("walls_per_player")
                .map(|v| v as u8)
                .unwrap_or(defaults.walls_per_player),
            max_moves: config.get_usize("max_moves").unwrap_or(defaults.max_moves),
        })
    }
}
