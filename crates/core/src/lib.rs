//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: the board, the slide/merge engine, random
//! tile spawning and the game session. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised by unit and integration tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation moves, spawns and snapshots
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid of optional tile values plus the score
//! - [`engine`]: Stateless slide/merge passes and legal-move queries
//! - [`spawn`]: Random placement of new 2/4 tiles from an injected RNG
//! - [`rng`]: Seedable LCG used as the default randomness source
//! - [`game_state`]: Session that owns a board, spawns after moves, tracks game over
//! - [`snapshot`]: Plain read model for renderers
//!
//! # Game Rules
//!
//! - **Slide**: All tiles travel toward the chosen edge until blocked
//! - **Merge**: Two equal tiles meeting along the travel axis become one tile of
//!   double value; the new value is added to the score
//! - **Merge once**: A tile created by a merge cannot merge again in the same move
//! - **Spawn**: After every move that changed the board, one tile appears on a
//!   random empty slot: 2 (90%) or 4 (10%)
//! - **Game over**: No direction changes the board
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! // A new game always starts with two tiles and no score
//! let mut game = GameState::new(12345);
//! assert_eq!(game.board().tile_count(), 2);
//! assert_eq!(game.score(), 0);
//!
//! // Apply moves
//! let report = game.apply_move(Direction::Left);
//! if report.changed {
//!     assert!(report.spawned.is_some());
//! }
//! game.apply_action(GameAction::Move(Direction::Up));
//!
//! // Start over
//! game.apply_action(GameAction::Restart);
//! assert_eq!(game.episode_id(), 1);
//! ```

pub mod board;
pub mod engine;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{has_any_legal_move, slide, slide_in_place, MoveOutcome, MoveResult};
pub use game_state::{GameState, MoveReport};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use spawn::{spawn_random_tile, TileSpawn};
