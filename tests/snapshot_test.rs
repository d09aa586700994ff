//! Snapshot serialization - the JSON shape observers see

use rand::rngs::mock::StepRng;
use serde_json::{json, Value};

use tui_2048::core::{Board, GameState};
use tui_2048::types::Direction;

#[test]
fn snapshot_serializes_board_rows_and_counters() {
    let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0, 0, 0, 8]]);
    let mut game = GameState::with_board(board, StepRng::new(0, 0));
    game.apply_move(Direction::Left);

    let value: Value = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(
        value,
        json!({
            "board": [[4, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [8, 0, 0, 0]],
            "score": 4,
            "max_tile": 8,
            "moves": 1,
            "episode_id": 0,
            "seed": 0,
            "game_over": false,
            "last_spawn": 1
        })
    );
}

#[test]
fn snapshot_without_spawn_serializes_null() {
    let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    let game = GameState::with_board(board, StepRng::new(0, 0));

    let value: Value = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(value["last_spawn"], Value::Null);
    assert_eq!(value["game_over"], Value::Bool(true));
    assert_eq!(value["board"][3][3], json!(2));
}
