//! Greedy-one-ply player: tries every valid color and plays whichever
//! floods the most cells at `origin`.
//!
//! Ported directly from `original_source/players/greedy.py`'s
//! `GreedyPlayer.get_best_move`, as a zero-sized type implementing the
//! `Player` trait (the same shape `solver/random.rs`'s `RandomPlayer`
//! would take without its RNG field).

use super::{Player, PlayerError};
use crate::board::{Board, Pos};
use crate::color::Color;

pub struct GreedyPlayer;

impl Player for GreedyPlayer {
    fn best_move(
        &mut self,
        board: &Board,
        origin: Pos,
        opponent_origin: Option<Pos>,
        _timeout: Option<f64>,
    ) -> Result<Color, PlayerError> {
        let colors: Vec<Color> = board.valid_moves(origin, opponent_origin).into_iter().collect();
        debug_assert!(!colors.is_empty(), "no valid moves on an unsolved board");

        let mut best_color = colors[0];
        let mut most_flooded = board.do_move(origin, colors[0]).count_flooded_cells(origin);

        for &color in &colors[1..] {
            let flooded = board.do_move(origin, color).count_flooded_cells(origin);
            if flooded > most_flooded {
                most_flooded = flooded;
                best_color = color;
            }
        }

        Ok(best_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_the_move_that_floods_more() {
        // origin color 0, row 0: [0,1,2,2] row1: [0,1,2,2]
        // playing 2 floods nothing extra from origin (not adjacent); playing 1 absorbs column 1.
        let b = Board::new(
            vec![0, 1, 2, 2, 0, 1, 2, 2]
                .into_iter()
                .map(Color::new)
                .collect(),
            2,
        )
        .unwrap();

        let mut player = GreedyPlayer;
        let mv = player.best_move(&b, (0, 0), None, None).unwrap();
        assert_eq!(mv, Color::new(1));
    }

    #[test]
    fn strictly_increases_flooded_count_whenever_any_move_does() {
        let b = Board::new(
            vec![0, 1, 0, 1, 0, 1, 0, 1, 0].into_iter().map(Color::new).collect(),
            3,
        )
        .unwrap();

        let before = b.count_flooded_cells((0, 0));
        let mut player = GreedyPlayer;
        let mv = player.best_move(&b, (0, 0), None, None).unwrap();
        let after = b.do_move((0, 0), mv).count_flooded_cells((0, 0));
        assert!(after > before);
    }
}
