//! Board tests - slot access, empty-slot enumeration, invariants

use tui_2048::core::Board;
use tui_2048::types::{EngineError, BOARD_CELLS, BOARD_SIDE};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.score(), 0);
    assert_eq!(board.tile_count(), 0);
    assert_eq!(board.max_tile(), 0);

    // All slots should be empty
    for i in 0..BOARD_CELLS {
        assert_eq!(board.get(i), Ok(None), "slot {} should be empty", i);
    }
    for row in 0..BOARD_SIDE {
        for col in 0..BOARD_SIDE {
            assert_eq!(board.get_at(row, col), Ok(None));
        }
    }
}

#[test]
fn test_board_get_out_of_range() {
    let board = Board::new();
    assert_eq!(
        board.get(BOARD_CELLS),
        Err(EngineError::IndexOutOfRange { index: 16 })
    );
    assert!(board.get(usize::MAX).is_err());
}

#[test]
fn test_board_get_at_out_of_range_reports_position() {
    let mut board = Board::new();
    board.set(4, Some(2)).unwrap();

    // (0, 4) is off the grid even though flat index 4 holds a tile.
    let err = board.get_at(0, 4).unwrap_err();
    assert_eq!(err, EngineError::PositionOutOfRange { row: 0, col: 4 });
    assert_eq!(err.to_string(), "position (0, 4) out of range (0..4)");
    assert_eq!(board.get_at(1, 0), Ok(Some(2)));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    // Set a slot
    board.set(5, Some(8)).unwrap();
    assert_eq!(board.get(5), Ok(Some(8)));
    assert_eq!(board.get_at(1, 1), Ok(Some(8)));

    // Set another slot
    board.set(0, Some(2)).unwrap();
    assert_eq!(board.get(0), Ok(Some(2)));

    // Clear a slot
    board.set(5, None).unwrap();
    assert_eq!(board.get(5), Ok(None));
}

#[test]
fn test_board_set_out_of_range() {
    let mut board = Board::new();
    assert_eq!(
        board.set(16, Some(2)),
        Err(EngineError::IndexOutOfRange { index: 16 })
    );
    // Failed writes leave the board alone
    assert_eq!(board, Board::new());
}

#[test]
fn test_empty_slots_ascending() {
    let board = Board::from_rows([[2, 0, 4, 0], [0, 0, 0, 0], [8, 8, 8, 8], [0, 2, 0, 2]]);
    let empty = board.empty_slots();
    assert_eq!(
        empty.as_slice(),
        &[1, 3, 4, 5, 6, 7, 12, 14]
    );
    assert!(empty.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_empty_slots_full_and_empty() {
    assert_eq!(Board::new().empty_slots().len(), BOARD_CELLS);

    let full = Board::from_rows([[2; 4]; 4]);
    assert!(full.empty_slots().is_empty());
    assert!(full.is_full());
}

#[test]
fn test_board_aggregates() {
    let board = Board::from_rows([[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 1024, 0], [0, 0, 0, 2]]);
    assert_eq!(board.tile_count(), 4);
    assert_eq!(board.sum(), 1032);
    assert_eq!(board.max_tile(), 1024);
    assert!(!board.is_full());
}

#[test]
fn test_board_clear_resets_score() {
    let mut board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).with_score(12);
    assert_eq!(board.score(), 12);
    board.clear();
    assert_eq!(board, Board::new());
}
