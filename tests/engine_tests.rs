//! Engine tests - merge laws and conservation properties over random boards

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tui_2048::core::engine::{can_move, has_any_legal_move, legal_moves, slide, slide_in_place};
use tui_2048::core::Board;
use tui_2048::types::{Direction, BOARD_CELLS};

fn row(values: [u32; 4]) -> Board {
    Board::from_rows([values, [0; 4], [0; 4], [0; 4]])
}

/// Board with roughly half the slots filled with small powers of two.
fn random_board(rng: &mut StdRng) -> Board {
    let mut board = Board::new();
    for i in 0..BOARD_CELLS {
        if rng.gen_bool(0.55) {
            let exp = rng.gen_range(1..=5);
            board.set(i, Some(1 << exp)).unwrap();
        }
    }
    board
}

fn sorted_tiles(board: &Board) -> Vec<u32> {
    let mut tiles: Vec<u32> = board.cells().iter().flatten().copied().collect();
    tiles.sort_unstable();
    tiles
}

#[test]
fn test_merge_once_law() {
    let result = slide(&row([2, 2, 2, 2]), Direction::Left);
    assert_eq!(result.board.to_rows()[0], [4, 4, 0, 0]);
    assert_eq!(result.board.score(), 8);

    let result = slide(&row([2, 2, 2, 2]), Direction::Right);
    assert_eq!(result.board.to_rows()[0], [0, 0, 4, 4]);
    assert_eq!(result.score_delta, 8);
}

#[test]
fn test_row_scenarios() {
    let cases: [([u32; 4], Direction, [u32; 4], u32); 8] = [
        ([2, 0, 2, 4], Direction::Left, [4, 4, 0, 0], 4),
        ([2, 4, 8, 16], Direction::Left, [2, 4, 8, 16], 0),
        ([0, 0, 0, 2], Direction::Left, [2, 0, 0, 0], 0),
        ([2, 0, 0, 0], Direction::Right, [0, 0, 0, 2], 0),
        ([4, 4, 8, 8], Direction::Left, [8, 16, 0, 0], 24),
        ([4, 4, 8, 8], Direction::Right, [0, 0, 8, 16], 24),
        ([8, 0, 8, 8], Direction::Right, [0, 0, 8, 16], 16),
        ([2, 2, 4, 8], Direction::Left, [4, 4, 8, 0], 4),
    ];

    for (input, dir, expected, delta) in cases {
        let result = slide(&row(input), dir);
        assert_eq!(result.board.to_rows()[0], expected, "{:?} {:?}", input, dir);
        assert_eq!(result.score_delta, delta, "{:?} {:?}", input, dir);
        assert_eq!(result.changed, input != expected);
    }
}

#[test]
fn test_columns_match_transposed_rows() {
    let board = Board::from_rows([[2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0]]);
    let up = slide(&board, Direction::Up).board.to_rows();
    assert_eq!([up[0][0], up[1][0], up[2][0], up[3][0]], [4, 4, 0, 0]);

    let down = slide(&board, Direction::Down).board.to_rows();
    assert_eq!([down[0][0], down[1][0], down[2][0], down[3][0]], [0, 0, 4, 4]);
}

#[test]
fn test_noop_identity() {
    let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
        .with_score(100);
    for dir in Direction::ALL {
        let mut copy = board;
        let outcome = slide_in_place(&mut copy, dir);
        assert!(!outcome.changed);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(copy, board);
    }
    assert!(!has_any_legal_move(&board));
    assert!(legal_moves(&board).is_empty());
}

#[test]
fn test_full_board_can_still_merge() {
    let board = Board::from_rows([[2, 2, 4, 8], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]]);
    assert!(board.is_full());
    let result = slide(&board, Direction::Left);
    assert!(result.changed);
    assert_eq!(result.board.to_rows()[0], [4, 4, 8, 0]);
}

#[test]
fn test_conservation_over_random_boards() {
    let mut rng = StdRng::seed_from_u64(0x2048);

    for _ in 0..500 {
        let board = random_board(&mut rng);
        for dir in Direction::ALL {
            let result = slide(&board, dir);

            // Merges remove one tile each; the board sum never changes.
            assert_eq!(
                result.board.tile_count(),
                board.tile_count() - result.merges as usize
            );
            assert_eq!(result.board.sum(), board.sum());
            assert_eq!(result.board.score(), board.score() + result.score_delta);

            if result.merges == 0 {
                assert_eq!(sorted_tiles(&result.board), sorted_tiles(&board));
                assert_eq!(result.score_delta, 0);
            }

            assert_eq!(result.changed, result.board.cells() != board.cells());
            assert_eq!(can_move(&board, dir), result.changed);
        }
    }
}

#[test]
fn test_moves_are_idempotent_without_merges() {
    // After a pass nothing is left to slide, so a repeat pass only changes the
    // board if a fresh pair of equal tiles became adjacent.
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
        let board = random_board(&mut rng);
        for dir in Direction::ALL {
            let once = slide(&board, dir).board;
            let twice = slide(&once, dir);
            if twice.changed {
                assert!(twice.merges > 0);
            }
        }
    }
}

#[test]
fn test_tiles_end_compacted_toward_travel_edge() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..300 {
        let board = random_board(&mut rng);
        let rows = slide(&board, Direction::Left).board.to_rows();
        for r in rows {
            let first_gap = r.iter().position(|&v| v == 0).unwrap_or(4);
            assert!(r[first_gap..].iter().all(|&v| v == 0), "row {:?} has a gap", r);
        }
    }
}
