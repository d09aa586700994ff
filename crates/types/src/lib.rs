//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (rule engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The 2048 grid is fixed:
//!
//! - **Side**: 4 rows by 4 columns
//! - **Cells**: 16 slots, row-major (`index = row * 4 + col`)
//!
//! # Spawn Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_LOW_TILE` | 2 | Common spawn value |
//! | `SPAWN_HIGH_TILE` | 4 | Rare spawn value |
//! | `SPAWN_LOW_PROBABILITY` | 0.9 | Chance a spawn is `SPAWN_LOW_TILE` |
//! | `INITIAL_TILES` | 2 | Tiles placed on a fresh board |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, BOARD_CELLS, BOARD_SIDE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! // Unknown names are rejected
//! assert!(Direction::parse("diagonal").is_err());
//!
//! // Parse game action
//! let action = GameAction::from_str("up").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(BOARD_SIDE, 4);
//! assert_eq!(BOARD_CELLS, 16);
//! ```

use thiserror::Error;

/// Grid side length (4 rows, 4 columns)
pub const BOARD_SIDE: usize = 4;

/// Total number of slots on the grid
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Tile value placed by most spawns
pub const SPAWN_LOW_TILE: Tile = 2;

/// Tile value placed by the remaining spawns
pub const SPAWN_HIGH_TILE: Tile = 4;

/// Probability that a spawned tile is [`SPAWN_LOW_TILE`]
pub const SPAWN_LOW_PROBABILITY: f64 = 0.9;

/// Number of tiles placed when a game starts or restarts
pub const INITIAL_TILES: usize = 2;

/// Tile value that traditionally marks a won game
pub const WINNING_TILE: Tile = 2048;

/// A tile value (always a power of two, minimum 2)
pub type Tile = u32;

/// A slot on the grid
///
/// - `None`: Empty slot
/// - `Some(Tile)`: Slot holding the given tile value
pub type Cell = Option<Tile>;

/// Errors raised by the rule engine.
///
/// Both kinds are programmer errors at a boundary: callers are expected to validate
/// input before it reaches the engine. A board with no legal move is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A direction (or other argument) outside the accepted vocabulary.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Slot access outside `0..BOARD_CELLS`.
    #[error("slot index {index} out of range (0..{})", BOARD_CELLS)]
    IndexOutOfRange { index: usize },
    /// Row or column outside `0..BOARD_SIDE`.
    #[error("position ({row}, {col}) out of range (0..{})", BOARD_SIDE)]
    PositionOutOfRange { row: usize, col: usize },
}

/// Travel directions for a move
///
/// Tiles slide toward the named edge:
/// - **Up**: toward row 0
/// - **Down**: toward row 3
/// - **Left**: toward column 0
/// - **Right**: toward column 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in wire-code order (0 = up .. 3 = right).
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Like [`Direction::from_str`], but reports unknown names as
    /// [`EngineError::InvalidArgument`].
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        Self::from_str(s)
            .ok_or_else(|| EngineError::InvalidArgument(format!("unknown direction {s:?}")))
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The direction pointing the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for `Up` and `Down`.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl TryFrom<u8> for Direction {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| EngineError::InvalidArgument(format!("direction code {code} not in 0..=3")))
    }
}

/// Game actions that can be applied to a session
///
/// Produced by the input layer; consumed by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in the given direction
    Move(Direction),
    /// Start a fresh game
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("down"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

impl From<Direction> for GameAction {
    fn from(dir: Direction) -> Self {
        GameAction::Move(dir)
    }
}
