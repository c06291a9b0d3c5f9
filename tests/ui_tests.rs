use battleship_gym::{render_board, Board, Orientation, Ship};

fn tiny_board() -> Board {
    let ship = Ship::new("destroyer", 2, (0, 0), Orientation::East).unwrap();
    Board::from_ships(3, vec![ship]).unwrap()
}

#[test]
fn test_play_mode_hides_intact_ships() {
    let mut board = tiny_board();
    board.torpedo(0, 0).unwrap();

    let hidden = render_board(&board, false);
    assert!(hidden.contains('X'));
    assert!(!hidden.contains('#'));

    let revealed = render_board(&board, true);
    assert!(revealed.contains('X'));
    assert!(revealed.contains('#'));
}

#[test]
fn test_render_reports_progress() {
    let mut board = tiny_board();
    board.torpedo(2, 2).unwrap();
    let out = render_board(&board, true);
    let lines: Vec<_> = out.lines().collect();
    // header, three rows, status line
    assert_eq!(lines.len(), 5);
    assert!(lines[4].contains("Torpedoes used: 1"));
    assert!(lines[4].contains("ships afloat: 1 (2 segments)"));
}
