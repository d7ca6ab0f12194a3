//! Terminal rendering of boards and move sequences.
//!
//! Renders colors against a 16-entry standard+bright `term_painter`
//! palette (rather than a fixed handful of hardcoded variants for a
//! fixed-size color board), with a right-aligned two-digit numeric
//! fallback for colors outside it.

use crate::board::Board;
use crate::color::Color;
use std::io::Write;
use term_painter::Color as TermColor;
use term_painter::{Attr, ToStyle};

const PALETTE: [TermColor; 16] = [
    TermColor::Black,
    TermColor::Red,
    TermColor::Green,
    TermColor::Yellow,
    TermColor::Blue,
    TermColor::Magenta,
    TermColor::Cyan,
    TermColor::White,
    TermColor::BrightBlack,
    TermColor::BrightRed,
    TermColor::BrightGreen,
    TermColor::BrightYellow,
    TermColor::BrightBlue,
    TermColor::BrightMagenta,
    TermColor::BrightCyan,
    TermColor::BrightWhite,
];

/// Renders one cell's color as two terminal glyphs: a filled block pair
/// in the palette color for `tag < 16`, or a right-aligned two-character
/// number for anything beyond the palette's reach.
pub fn glyph(color: Color) -> String {
    match PALETTE.get(color.tag as usize) {
        Some(&term_color) => Attr::Plain.bg(term_color).paint("  ").to_string(),
        None => format!("{:>2}", color.tag),
    }
}

pub fn print_board(board: &Board) {
    let mut out = std::io::stdout();
    for y in 0..board.rows() {
        for x in 0..board.cols() {
            let _ = write!(out, "{}", glyph(board.color_at((x, y))));
        }
        let _ = writeln!(out);
    }
}

/// Prints the full move sequence found by a solver/player run, with the
/// same glyphs used for board cells.
pub fn print_solution(moves: &[Color]) {
    print!("Solution ({} moves): ", moves.len());
    for &mv in moves {
        print!("{}", glyph(mv));
    }
    println!();
}
