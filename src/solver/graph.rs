//! The exact region-graph solver: iterative-deepening bounded DFS over a
//! `Graph`, with admissible lower-bound pruning and greedy successor
//! ordering, plus the `GraphPlayer` adapter that caches a found
//! solution's remaining moves across calls.
//!
//! The shared-bitset, undo-based recursion shape (push move + union on
//! descent, pop + subtract on return, rather than copying the flooded
//! set per frame) carries over a fixed-capacity bitset/game-tree
//! approach to a dynamic-width `Bitset`, implementing the exact
//! prune/ordering/iterative-deepening control flow of
//! `original_source/players/graph/solver.py`'s
//! `GraphSinglePlayerSolver`. The Python's `raise SolutionFound(moves)`
//! becomes an explicit `bool` return threaded through the recursion
//! instead of unwinding.

use super::{Player, PlayerError, Solution};
use crate::bitset::Bitset;
use crate::board::{Board, Pos};
use crate::color::Color;
use crate::graph::{Graph, NodeId};
use log::{debug, trace};
use std::collections::VecDeque;

struct Search<'g> {
    graph: &'g Graph,
    max_moves: isize,
    best_solution: Option<Solution>,
    attempts: u64,
}

impl<'g> Search<'g> {
    /// Nodes of color `c` not yet flooded that have at least one neighbour
    /// already in `flooded` — the nodes a move with color `c` would add.
    fn newly_flooded(&self, flooded: &Bitset, c: Color) -> Bitset {
        let unflooded_of_color = Bitset::difference(self.graph.nodes_with_color(c), flooded);
        let mut result = Bitset::empty(self.graph.node_count());
        for node in unflooded_of_color.iter() {
            if self.graph.neighbours(node).intersects(flooded) {
                result.set(node);
            }
        }
        result
    }

    /// The admissible lower bound: one more move is required for every
    /// color that still has at least one unflooded node.
    fn unflooded_color_count(&self, flooded: &Bitset) -> usize {
        (0..self.graph.color_count())
            .filter(|&tag| {
                let color_set = self.graph.nodes_with_color(Color::new(tag as u8));
                !Bitset::difference(color_set, flooded).is_empty()
            })
            .count()
    }

    /// Bounded DFS from `flooded` with move list `moves`. Returns `true`
    /// (and records `best_solution`) the first time a full flood is found
    /// within `max_moves`; the caller unwinds immediately on `true`
    /// rather than searching for further equal-length solutions.
    fn dfs(&mut self, flooded: &mut Bitset, moves: &mut Vec<Color>) -> bool {
        if moves.len() as isize > self.max_moves {
            return false;
        }

        if self.unflooded_color_count(flooded) as isize + moves.len() as isize > self.max_moves {
            return false;
        }

        if flooded.popcount() == self.graph.node_count() {
            self.best_solution = Some(moves.iter().copied().collect());
            return true;
        }

        self.attempts += 1;
        if self.attempts % 10_000 == 0 {
            trace!("{} attempts, currently {} moves deep", self.attempts, moves.len());
        }

        let last_move = moves.last().copied();
        let mut candidates: Vec<(Color, usize, Bitset)> = (0..self.graph.color_count())
            .map(|tag| Color::new(tag as u8))
            .filter(|&c| Some(c) != last_move)
            .filter_map(|c| {
                let newly = self.newly_flooded(flooded, c);
                if newly.is_empty() {
                    None
                } else {
                    let heuristic = newly.popcount();
                    Some((c, heuristic, newly))
                }
            })
            .collect();

        // Greedy-first, ties broken by ascending color tag (the order
        // `candidates` was built in, which `sort_by_key` preserves: a
        // stable sort keeps equal-heuristic candidates in their original
        // relative order).
        candidates.sort_by_key(|&(_, heuristic, _)| std::cmp::Reverse(heuristic));

        for (color, _, newly) in candidates {
            flooded.union_with(&newly);
            moves.push(color);

            let found = self.dfs(flooded, moves);

            moves.pop();
            flooded.subtract_with(&newly);

            if found {
                return true;
            }
        }

        false
    }
}

/// Finds a shortest move sequence flooding `graph` entirely, starting
/// from `start`, via iterative deepening: each discovered solution of
/// length `L` tightens the bound to `L - 1` and restarts the search.
pub fn solve(graph: &Graph, start: NodeId) -> Solution {
    let mut search = Search {
        graph,
        max_moves: graph.node_count() as isize,
        best_solution: None,
        attempts: 0,
    };

    debug!("solving graph with {} nodes from node {}", graph.node_count(), start);

    loop {
        let mut flooded = Bitset::with_only(graph.node_count(), start);
        let mut moves = Vec::new();

        if search.dfs(&mut flooded, &mut moves) {
            let len = search.best_solution.as_ref().unwrap().len();
            debug!("found solution of length {len}, tightening bound to {}", len as isize - 1);
            search.max_moves = len as isize - 1;
        } else {
            break;
        }
    }

    search.best_solution.unwrap_or_default()
}

/// Adapter that solves the whole board once and hands out the found
/// sequence's moves one at a time, re-solving only when the cache runs
/// out. This is only correct if the caller applies each returned move
/// to `origin` before calling again — the adapter does not itself
/// verify the board evolved as assumed.
#[derive(Default)]
pub struct GraphPlayer {
    cached_moves: Option<VecDeque<Color>>,
}

impl GraphPlayer {
    pub fn new() -> GraphPlayer {
        GraphPlayer { cached_moves: None }
    }
}

impl Player for GraphPlayer {
    fn best_move(
        &mut self,
        board: &Board,
        origin: Pos,
        opponent_origin: Option<Pos>,
        _timeout: Option<f64>,
    ) -> Result<Color, PlayerError> {
        if opponent_origin.is_some() {
            return Err(PlayerError::MultiplayerNotSupported);
        }

        if let Some(cached) = &mut self.cached_moves {
            if let Some(mv) = cached.pop_front() {
                if cached.is_empty() {
                    self.cached_moves = None;
                }
                return Ok(mv);
            }
        }

        let graph = Graph::build(board);
        let node_ids = Graph::node_ids(board);
        let start = Graph::node_at(board, &node_ids, origin);

        let solution = solve(&graph, start);
        debug_assert!(!solution.is_empty(), "solver found no solution on a well-formed graph");

        let mut queue: VecDeque<Color> = solution.into_iter().collect();
        let first = queue.pop_front().expect("solution is non-empty");
        if !queue.is_empty() {
            self.cached_moves = Some(queue);
        }
        Ok(first)
    }
}
