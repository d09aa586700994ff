//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each slot is either empty or holds a tile value.
//! Uses a flat array for better cache locality and zero-allocation.
//! Slot index is `row * 4 + col`; row 0 is the top edge, column 0 the left edge.

use arrayvec::ArrayVec;

use crate::types::{Cell, EngineError, Tile, BOARD_CELLS, BOARD_SIDE};

/// The game board - 16 slots plus the accumulated score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of slots, row-major order (row * SIDE + col)
    cells: [Cell; BOARD_CELLS],
    score: u32,
}

impl Board {
    /// Create a new empty board with zero score
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
            score: 0,
        }
    }

    /// Build a board from row-major values, `0` meaning empty.
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_rows([
    ///     [2, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 4],
    /// ]);
    /// assert_eq!(board.get(0), Ok(Some(2)));
    /// assert_eq!(board.get(15), Ok(Some(4)));
    /// assert_eq!(board.tile_count(), 2);
    /// ```
    pub fn from_rows(rows: [[Tile; BOARD_SIDE]; BOARD_SIDE]) -> Self {
        let mut cells = [None; BOARD_CELLS];
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    cells[row * BOARD_SIDE + col] = Some(value);
                }
            }
        }
        Self { cells, score: 0 }
    }

    /// Same board with the given score.
    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return None;
        }
        Some(row * BOARD_SIDE + col)
    }

    #[inline(always)]
    fn check(index: usize) -> Result<usize, EngineError> {
        if index < BOARD_CELLS {
            Ok(index)
        } else {
            Err(EngineError::IndexOutOfRange { index })
        }
    }

    /// Get the slot at a flat index
    pub fn get(&self, index: usize) -> Result<Cell, EngineError> {
        Self::check(index).map(|i| self.cells[i])
    }

    /// Get the slot at (row, col)
    pub fn get_at(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        Self::index(row, col)
            .map(|i| self.cells[i])
            .ok_or(EngineError::PositionOutOfRange { row, col })
    }

    /// Write or clear the slot at a flat index.
    ///
    /// Values are not checked for being powers of two; the engine only ever writes
    /// doubled tiles and spawn values.
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), EngineError> {
        let i = Self::check(index)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// All empty slot indices, ascending.
    pub fn empty_slots(&self) -> ArrayVec<usize, BOARD_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get a reference to the internal slot array
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Number of occupied slots
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Row-major values with `0` for empty slots
    pub fn to_rows(&self) -> [[Tile; BOARD_SIDE]; BOARD_SIDE] {
        let mut rows = [[0; BOARD_SIDE]; BOARD_SIDE];
        for (i, cell) in self.cells.iter().enumerate() {
            rows[i / BOARD_SIDE][i % BOARD_SIDE] = cell.unwrap_or(0);
        }
        rows
    }

    /// Clear every slot and reset the score
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_CELLS];
        self.score = 0;
    }

    /// Unchecked slot access for the engine's inner loop.
    #[inline(always)]
    pub(crate) fn slot(&self, index: usize) -> Cell {
        self.cells[index]
    }

    #[inline(always)]
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
