//! Engine module - direction-based slide and merge
//!
//! A pass visits every slot once, in an order where slots nearest the travel edge
//! come first. Each occupied slot is advanced step by step toward that edge until it
//! hits the boundary, a different tile, or an equal tile it can merge into. A slot
//! that received a merge this pass cannot merge again (`2 2 2` becomes `4 2`, never
//! `8`), and a tile that merged stops there.
//!
//! Everything here is stateless: the merge markers live on the stack for one call.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Direction, BOARD_CELLS, BOARD_SIDE};

/// What a pass did to a board, without the board itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// At least one tile moved or merged
    pub changed: bool,
    /// Sum of the tiles created by merges this pass
    pub score_delta: u32,
    /// Number of merges this pass
    pub merges: u8,
}

/// Result of [`slide`]: the post-move board plus what changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    pub changed: bool,
    pub score_delta: u32,
    pub merges: u8,
}

/// Adjacent slot in the travel direction, or `None` at the grid boundary.
///
/// ```
/// use tui_2048_core::engine::next_index;
/// use tui_2048_types::Direction;
///
/// assert_eq!(next_index(1, Direction::Left), Some(0));
/// assert_eq!(next_index(4, Direction::Up), Some(0));
/// assert_eq!(next_index(3, Direction::Right), None);
/// assert_eq!(next_index(13, Direction::Down), None);
/// ```
#[inline]
pub fn next_index(index: usize, direction: Direction) -> Option<usize> {
    if index >= BOARD_CELLS {
        return None;
    }
    let row = index / BOARD_SIDE;
    let col = index % BOARD_SIDE;

    match direction {
        Direction::Up if row > 0 => Some(index - BOARD_SIDE),
        Direction::Down if row < BOARD_SIDE - 1 => Some(index + BOARD_SIDE),
        Direction::Left if col > 0 => Some(index - 1),
        Direction::Right if col < BOARD_SIDE - 1 => Some(index + 1),
        _ => None,
    }
}

/// Order in which a pass visits slots.
///
/// Vertical moves walk rows, horizontal moves walk columns; in both cases the line
/// lying on the travel edge is visited first so that tiles in front are settled
/// before the tiles behind them advance.
pub fn traversal_order(direction: Direction) -> [usize; BOARD_CELLS] {
    let mut order = [0usize; BOARD_CELLS];
    let mut n = 0;

    for step in 0..BOARD_SIDE {
        let line = match direction {
            Direction::Up | Direction::Left => step,
            Direction::Down | Direction::Right => BOARD_SIDE - 1 - step,
        };
        for along in 0..BOARD_SIDE {
            order[n] = if direction.is_vertical() {
                line * BOARD_SIDE + along
            } else {
                along * BOARD_SIDE + line
            };
            n += 1;
        }
    }

    order
}

/// Apply one pass to `board` in place.
///
/// The score on `board` grows by the returned `score_delta`. When nothing can move
/// the board is left untouched and `changed` is false.
pub fn slide_in_place(board: &mut Board, direction: Direction) -> MoveOutcome {
    let mut merged = [false; BOARD_CELLS];
    let mut outcome = MoveOutcome::default();

    for from in traversal_order(direction) {
        let Some(value) = board.slot(from) else {
            continue;
        };

        let mut at = from;
        while let Some(to) = next_index(at, direction) {
            match board.slot(to) {
                None => {
                    *board.slot_mut(to) = Some(value);
                    *board.slot_mut(at) = None;
                    at = to;
                    outcome.changed = true;
                }
                Some(target) if target == value && !merged[to] => {
                    let doubled = value.saturating_mul(2);
                    *board.slot_mut(to) = Some(doubled);
                    *board.slot_mut(at) = None;
                    merged[to] = true;
                    board.add_score(doubled);
                    outcome.score_delta = outcome.score_delta.saturating_add(doubled);
                    outcome.merges += 1;
                    outcome.changed = true;
                    break;
                }
                Some(_) => break,
            }
        }
    }

    outcome
}

/// Pure form of [`slide_in_place`]: returns the post-move board.
///
/// ```
/// use tui_2048_core::{engine::slide, Board};
/// use tui_2048_types::Direction;
///
/// let board = Board::from_rows([
///     [2, 0, 2, 4],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ]);
/// let result = slide(&board, Direction::Left);
/// assert!(result.changed);
/// assert_eq!(result.score_delta, 4);
/// assert_eq!(result.board.to_rows()[0], [4, 4, 0, 0]);
/// ```
pub fn slide(board: &Board, direction: Direction) -> MoveResult {
    let mut next = *board;
    let outcome = slide_in_place(&mut next, direction);
    MoveResult {
        board: next,
        changed: outcome.changed,
        score_delta: outcome.score_delta,
        merges: outcome.merges,
    }
}

/// True if a pass in `direction` would change the board.
///
/// A pass changes something exactly when some tile has an empty or equal slot right
/// in front of it, so this avoids running the full pass.
pub fn can_move(board: &Board, direction: Direction) -> bool {
    (0..BOARD_CELLS).any(|index| {
        let Some(value) = board.slot(index) else {
            return false;
        };
        match next_index(index, direction).map(|to| board.slot(to)) {
            Some(None) => true,
            Some(Some(target)) => target == value,
            None => false,
        }
    })
}

/// Directions in which a pass would change the board.
pub fn legal_moves(board: &Board) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(board, dir))
        .collect()
}

/// False once no direction can change the board (the game is over).
pub fn has_any_legal_move(board: &Board) -> bool {
    Direction::ALL.iter().any(|&dir| can_move(board, dir))
}
