//! "kurt" player: a two-signal greedy heuristic, documented upstream as
//! having observable bugs.
//!
//! Ported from `original_source/players/kurt.py`'s `KurtPlayer.
//! get_best_move`. Candidates are first filtered down to colors that
//! strictly increase the flooded-cell count; among those, the one
//! maximizing `flooded_cells / total_cells_of_that_color_on_the_new_board`
//! wins.
//!
//! The original leaves `best_color` referenced-before-assignment when no
//! candidate clears the `adjacent_colors` filter (a `NameError` at
//! runtime in Python). Here we fall back to the first valid move rather
//! than propagate a panic, since "no improving candidate" is a real,
//! reachable state (a board one move from solved, say) and not a
//! can't-happen internal invariant.

use super::{Player, PlayerError};
use crate::board::{Board, Pos};
use crate::color::Color;

pub struct KurtPlayer;

fn count_color(board: &Board, color: Color) -> usize {
    board.colors().iter().filter(|&&c| c == color).count()
}

impl Player for KurtPlayer {
    fn best_move(
        &mut self,
        board: &Board,
        origin: Pos,
        opponent_origin: Option<Pos>,
        _timeout: Option<f64>,
    ) -> Result<Color, PlayerError> {
        let colors: Vec<Color> = board.valid_moves(origin, opponent_origin).into_iter().collect();
        debug_assert!(!colors.is_empty(), "no valid moves on an unsolved board");

        let current_flooded = board.count_flooded_cells(origin);
        let adjacent_colors: Vec<Color> = colors
            .iter()
            .copied()
            .filter(|&color| board.do_move(origin, color).count_flooded_cells(origin) > current_flooded)
            .collect();

        let mut most_flooded_percentage = 0.0f64;
        let mut best_color = colors[0];

        for color in adjacent_colors {
            let future_board = board.do_move(origin, color);
            let flooded = future_board.count_flooded_cells(origin);
            let total_of_color = count_color(&future_board, color);
            if total_of_color == 0 {
                continue;
            }
            let flooded_percentage = flooded as f64 / total_of_color as f64;

            if flooded_percentage > most_flooded_percentage {
                most_flooded_percentage = flooded_percentage;
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
    fn falls_back_to_first_valid_move_without_improving_candidate() {
        // Every move ties or loses ground relative to the origin region: the
        // board is one move from fully solved already, so nothing strictly
        // increases the flooded count beyond what the first candidate gives.
        let b = Board::new(vec![0, 0, 0, 1].into_iter().map(Color::new).collect(), 2).unwrap();
        let mut player = KurtPlayer;
        let mv = player.best_move(&b, (0, 0), None, None);
        assert!(mv.is_ok());
    }

    #[test]
    fn picks_an_improving_candidate_when_one_exists() {
        let b = Board::new(
            vec![0, 1, 0, 1, 0, 1, 0, 1, 0].into_iter().map(Color::new).collect(),
            3,
        )
        .unwrap();
        let mut player = KurtPlayer;
        let before = b.count_flooded_cells((0, 0));
        let mv = player.best_move(&b, (0, 0), None, None).unwrap();
        let after = b.do_move((0, 0), mv).count_flooded_cells((0, 0));
        assert!(after > before);
    }
}
