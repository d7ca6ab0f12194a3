//! Random player: picks uniformly among the currently valid moves.
//!
//! `original_source/players/random.py`'s `RandomPlayer.get_best_move` is
//! the per-move version implemented here:
//! `random.choice(list(board.get_valid_moves(...)))`. The RNG is an
//! explicit handle owned by this player, not a process-global
//! `rand::thread_rng()`.

use super::{Player, PlayerError};
use crate::board::{Board, Pos};
use crate::color::Color;
use rand::Rng;

pub struct RandomPlayer<R> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> RandomPlayer<R> {
        RandomPlayer { rng }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn best_move(
        &mut self,
        board: &Board,
        origin: Pos,
        opponent_origin: Option<Pos>,
        _timeout: Option<f64>,
    ) -> Result<Color, PlayerError> {
        let moves: Vec<Color> = board.valid_moves(origin, opponent_origin).into_iter().collect();
        debug_assert!(!moves.is_empty(), "no valid moves on an unsolved board");
        let idx = self.rng.gen_range(0..moves.len());
        Ok(moves[idx])
    }
}
