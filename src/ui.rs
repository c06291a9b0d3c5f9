#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::board::Board;

const OCEAN: char = '~';
const SHIP: char = '#';
const HIT: char = 'X';

/// Render the board as a labelled text grid. Intact ship segments are only
/// drawn when `reveal` is set; hits are always shown.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let dim = board.dim();
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..dim {
        let _ = write!(out, "{:>3}", c);
    }
    out.push('\n');
    for (r, row) in board.grid().rows().enumerate() {
        let _ = write!(out, "{:>3}", r);
        for &cell in row {
            let ch = match cell {
                v if v < 0 => HIT,
                v if v > 0 && reveal => SHIP,
                _ => OCEAN,
            };
            let _ = write!(out, "{:>3}", ch);
        }
        out.push('\n');
    }
    let (afloat, health) = board.ships_afloat();
    let _ = writeln!(
        out,
        "Torpedoes used: {}  ships afloat: {} ({} segments)",
        board.score(),
        afloat,
        health
    );
    out
}

/// Print the board, revealing ships unless it is in play mode.
pub fn print_board(board: &Board) {
    print!("{}", render_board(board, !board.playmode()));
}
