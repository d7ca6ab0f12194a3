//! Players: adapters implementing a common move-selection contract over a
//! `Board`.
//!
//! A player picks one move at a time rather than a whole solution up
//! front, matching `original_source/players/base.py`'s
//! `BasePlayer.get_best_move`: the driver's play loop owns the board and
//! applies each move itself. The `graph` player still solves the whole
//! board internally on its first call and caches the remainder.

use crate::board::{Board, Pos};
use crate::color::Color;
use smallvec::SmallVec;
use std::fmt;

pub mod graph;
pub mod greedy;
pub mod kurt;
pub mod random;

pub use graph::GraphPlayer;
pub use greedy::GreedyPlayer;
pub use kurt::KurtPlayer;
pub use random::RandomPlayer;

/// A move sequence. `SmallVec` avoids a heap allocation for the common
/// case of boards that solve in a handful of moves.
pub type Solution = SmallVec<[Color; 16]>;

#[derive(Debug)]
pub enum PlayerError {
    /// The graph player does not support two-origin play, matching the
    /// original Python's
    /// `raise NotImplementedError("Multiplayer is not supported yet in
    /// GraphPlayer")`.
    MultiplayerNotSupported,
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerError::MultiplayerNotSupported => {
                write!(f, "multiplayer is not supported by this player")
            }
        }
    }
}

impl std::error::Error for PlayerError {}

/// Something that can pick the next move for a board, given where play
/// (and, optionally, an opponent) starts.
pub trait Player {
    /// Picks the next move. `timeout`, a number of seconds, is accepted
    /// for interface parity with `original_source/players/base.py` but is
    /// ignored by every player in this crate.
    fn best_move(
        &mut self,
        board: &Board,
        origin: Pos,
        opponent_origin: Option<Pos>,
        timeout: Option<f64>,
    ) -> Result<Color, PlayerError>;
}
