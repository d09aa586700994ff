//! Copyable read model handed to renderers once per frame.

use serde::Serialize;

use crate::types::{Tile, BOARD_SIDE, WINNING_TILE};

/// Plain read model of a session, for renderers and other observers.
///
/// `board` holds tile values row by row, `0` for empty slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: [[Tile; BOARD_SIDE]; BOARD_SIDE],
    pub score: u32,
    pub max_tile: Tile,
    pub moves: u32,
    pub episode_id: u32,
    pub seed: u32,
    pub game_over: bool,
    pub last_spawn: Option<usize>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// A tile of at least 2048 is on the board. Play continues past it.
    pub fn reached_goal(&self) -> bool {
        self.max_tile >= WINNING_TILE
    }

    /// Number of occupied slots.
    pub fn tile_count(&self) -> usize {
        self.board.iter().flatten().filter(|&&v| v != 0).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_SIDE]; BOARD_SIDE],
            score: 0,
            max_tile: 0,
            moves: 0,
            episode_id: 0,
            seed: 0,
            game_over: false,
            last_spawn: None,
        }
    }
}
