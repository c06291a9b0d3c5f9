use battleship_gym::{Board, BoardError, BoardState};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn played_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::with_default_fleet(&mut rng).unwrap();
    let shots = rng.random_range(0..60);
    for _ in 0..shots {
        let r = rng.random_range(0..10i32) as isize;
        let c = rng.random_range(0..10i32) as isize;
        board.torpedo(r, c).unwrap();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn bincode_roundtrip(seed in any::<u64>()) {
        let board = played_board(seed);
        let bytes = board.to_bytes().unwrap();
        let restored = Board::from_bytes(&bytes).unwrap();
        prop_assert_eq!(&restored, &board);
        prop_assert_eq!(restored.score(), board.score());
    }

    #[test]
    fn state_roundtrip(seed in any::<u64>()) {
        let board = played_board(seed);
        let state = BoardState::from(&board);
        let restored = Board::from_state(state.clone()).unwrap();
        prop_assert_eq!(restored.state(), state);
    }
}

#[test]
fn test_tampered_grid_is_rejected() {
    let board = played_board(5);
    let mut state = board.state();
    let ((r, c), v) = state.grid.iter_nonzero().next().unwrap();
    state.grid.set(r, c, if v > 0 { -v } else { v.abs() }).unwrap();
    assert_eq!(Board::from_state(state).unwrap_err(), BoardError::CorruptState);
}

#[test]
fn test_unknown_ship_marker_is_rejected() {
    let board = played_board(6);
    let mut state = board.state();
    state.ships.pop();
    assert_eq!(Board::from_state(state).unwrap_err(), BoardError::CorruptState);
}

#[test]
fn test_json_snapshot() {
    let board = played_board(7);
    let json = serde_json::to_string(&board.state()).unwrap();
    let state: BoardState = serde_json::from_str(&json).unwrap();
    assert_eq!(Board::from_state(state).unwrap(), board);
}

fn truncated_cells_state() -> BoardState {
    let board = played_board(8);
    let mut json = serde_json::to_value(board.state()).unwrap();
    json["grid"]["cells"] = serde_json::json!([0]);
    serde_json::from_value(json).unwrap()
}

#[test]
fn test_short_cell_buffer_is_rejected() {
    let state = truncated_cells_state();
    assert!(!state.grid.is_well_formed());
    assert_eq!(Board::from_state(state).unwrap_err(), BoardError::CorruptState);
}

#[test]
fn test_short_cell_buffer_bytes_are_rejected() {
    let bytes = bincode::serialize(&truncated_cells_state()).unwrap();
    let err = Board::from_bytes(&bytes).unwrap_err();
    assert_eq!(err.to_string(), BoardError::CorruptState.to_string());
}
