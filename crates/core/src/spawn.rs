//! Random tile placement.
//!
//! The only nondeterministic step of the game. The randomness source is always
//! passed in, so a seeded [`SimpleRng`](crate::rng::SimpleRng) or a mock RNG
//! reproduces the same placements.

use log::trace;
use rand::Rng;

use crate::board::Board;
use crate::types::{Tile, SPAWN_HIGH_TILE, SPAWN_LOW_PROBABILITY, SPAWN_LOW_TILE};

/// A tile placed by [`spawn_random_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSpawn {
    pub index: usize,
    pub value: Tile,
}

/// Draw a spawn value: 2 with probability 0.9, otherwise 4.
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_bool(SPAWN_LOW_PROBABILITY) {
        SPAWN_LOW_TILE
    } else {
        SPAWN_HIGH_TILE
    }
}

/// Place one tile on a uniformly chosen empty slot.
///
/// Returns `None` and leaves the board alone when it is full.
///
/// ```
/// use rand::rngs::mock::StepRng;
/// use tui_2048_core::{spawn::spawn_random_tile, Board};
///
/// let mut board = Board::new();
/// let mut rng = StepRng::new(0, 0);
/// let spawn = spawn_random_tile(&mut board, &mut rng).unwrap();
/// assert_eq!((spawn.index, spawn.value), (0, 2));
/// assert_eq!(board.tile_count(), 1);
/// ```
pub fn spawn_random_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<TileSpawn> {
    let empty = board.empty_slots();
    if empty.is_empty() {
        trace!("spawn skipped: board full");
        return None;
    }

    let index = empty[rng.gen_range(0..empty.len())];
    let value = random_tile_value(rng);
    *board.slot_mut(index) = Some(value);

    trace!("spawned {} at slot {}", value, index);
    Some(TileSpawn { index, value })
}
