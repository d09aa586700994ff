//! Game state module - the session that owns a board
//!
//! This module ties together the board, the slide engine and random spawning.
//! It maps actions to engine calls, spawns exactly one tile after every move
//! that changed the board, and tracks the game lifecycle (episodes, move count,
//! game over).

use log::{debug, info, trace};
use rand::RngCore;

use crate::board::Board;
use crate::engine::{has_any_legal_move, slide_in_place};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::spawn::{spawn_random_tile, TileSpawn};
use crate::types::{Direction, GameAction, INITIAL_TILES};

/// What one call to [`GameState::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub changed: bool,
    pub score_delta: u32,
    pub merges: u8,
    /// Tile placed after the move; `None` when the move changed nothing
    pub spawned: Option<TileSpawn>,
    /// No direction can change the board any more
    pub game_over: bool,
}

impl MoveReport {
    fn unchanged(game_over: bool) -> Self {
        Self {
            changed: false,
            score_delta: 0,
            merges: 0,
            spawned: None,
            game_over,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    rng: R,
    /// Seed the session was created with (0 when the RNG was supplied directly).
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Moves that changed the board in this episode.
    moves: u32,
    last_spawn: Option<TileSpawn>,
    game_over: bool,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed.
    ///
    /// The board starts with two spawned tiles and score 0.
    pub fn new(seed: u32) -> Self {
        let mut state = Self::with_board(Board::new(), SimpleRng::new(seed));
        state.seed = seed;
        state.reset_board();
        state
    }
}

impl<R: RngCore> GameState<R> {
    /// Create a new game drawing spawns from `rng`.
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self::with_board(Board::new(), rng);
        state.reset_board();
        state
    }

    /// Resume play from an existing board without spawning anything.
    pub fn with_board(board: Board, rng: R) -> Self {
        Self {
            game_over: !has_any_legal_move(&board),
            board,
            rng,
            seed: 0,
            episode_id: 0,
            moves: 0,
            last_spawn: None,
        }
    }

    /// Throw the current game away: empty board, score 0, two fresh tiles.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.reset_board();
        debug!(
            "restart: episode {} tiles {}",
            self.episode_id,
            self.board.tile_count()
        );
    }

    fn reset_board(&mut self) {
        self.board.clear();
        self.moves = 0;
        self.last_spawn = None;
        for _ in 0..INITIAL_TILES {
            if let Some(spawn) = spawn_random_tile(&mut self.board, &mut self.rng) {
                self.last_spawn = Some(spawn);
            }
        }
        self.game_over = !has_any_legal_move(&self.board);
    }

    /// Slide the board in `direction`.
    ///
    /// Spawns exactly one tile when the move changed the board (unless the board is
    /// full afterwards) and never spawns otherwise.
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        if self.game_over {
            return MoveReport::unchanged(true);
        }

        let outcome = slide_in_place(&mut self.board, direction);
        if !outcome.changed {
            trace!("{} is a no-op", direction.as_str());
            return MoveReport::unchanged(false);
        }

        self.moves = self.moves.saturating_add(1);
        let spawned = spawn_random_tile(&mut self.board, &mut self.rng);
        if spawned.is_some() {
            self.last_spawn = spawned;
        }
        self.game_over = !has_any_legal_move(&self.board);

        debug!(
            "move {} {}: +{} ({} merges), score {}",
            self.moves,
            direction.as_str(),
            outcome.score_delta,
            outcome.merges,
            self.board.score()
        );
        if self.game_over {
            info!(
                "game over: episode {} score {} max tile {} after {} moves",
                self.episode_id,
                self.board.score(),
                self.board.max_tile(),
                self.moves
            );
        }

        MoveReport {
            changed: true,
            score_delta: outcome.score_delta,
            merges: outcome.merges,
            spawned,
            game_over: self.game_over,
        }
    }

    /// Apply an input action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).changed,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_spawn(&self) -> Option<TileSpawn> {
        self.last_spawn
    }

    /// Fill `out` without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.to_rows();
        out.score = self.board.score();
        out.max_tile = self.board.max_tile();
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.game_over = self.game_over;
        out.last_spawn = self.last_spawn.map(|s| s.index);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
