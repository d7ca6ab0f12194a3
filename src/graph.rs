//! The region-adjacency graph reduction: turns a `Board` into a `Graph`
//! whose nodes are maximal same-color 4-connected regions.
//!
//! Builds region ids island-by-island via BFS, the way
//! `original_source/players/graph/graph.py`'s `get_node_ids` /
//! `get_node_colors` / `get_node_neighbours` do it. Neighbours are only
//! ever discovered by scanning each cell's right and down neighbour,
//! relying on adjacency's symmetry to cover left/up for free.

use crate::bitset::Bitset;
use crate::board::{Board, Pos};
use crate::color::Color;
use std::fmt;

pub type NodeId = usize;

/// The product of the region-graph builder: per-node colors and neighbour
/// sets, and per-color node sets.
#[derive(Clone)]
pub struct Graph {
    colors: Vec<Color>,
    neighbours: Vec<Bitset>,
    /// Indexed by `Color::tag`; `color_sets[c]` is the bitset of nodes
    /// having color `c`.
    color_sets: Vec<Bitset>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.colors.len()
    }

    pub fn color(&self, node: NodeId) -> Color {
        self.colors[node]
    }

    pub fn neighbours(&self, node: NodeId) -> &Bitset {
        &self.neighbours[node]
    }

    /// Nodes of color `c`, or an empty set if no node has that color.
    pub fn nodes_with_color(&self, c: Color) -> &Bitset {
        &self.color_sets[c.tag as usize]
    }

    pub fn color_count(&self) -> usize {
        self.color_sets.len()
    }

    /// Builds the region-adjacency graph of `board`: assign every cell a
    /// region id by flood-filling, scan right/down neighbours for
    /// adjacency, then bucket regions by color.
    pub fn build(board: &Board) -> Graph {
        let cell_count = board.cell_count();
        let mut node_id = vec![None; cell_count];
        let mut colors = Vec::new();

        // Step 1-2: assign every cell a node id by flood-filling from the
        // first unassigned cell in row-major order.
        for start_idx in 0..cell_count {
            if node_id[start_idx].is_some() {
                continue;
            }

            let pos = board.coords_of(start_idx);
            let region = board.flood_region(pos);
            let new_id = colors.len();
            colors.push(board.color_at(pos));

            for idx in region {
                node_id[idx] = Some(new_id);
            }
        }

        let node_count = colors.len();
        debug_assert!(node_id.iter().all(|id| id.is_some()));

        // Step 4: neighbours, scanning only right/down per cell; adjacency
        // is recorded symmetrically in both directions at once.
        let mut neighbours = vec![Bitset::empty(node_count); node_count];
        for y in 0..board.rows() {
            for x in 0..board.cols() {
                let this_node = node_id[board.index_of((x, y))].unwrap();

                if x + 1 < board.cols() {
                    let right_node = node_id[board.index_of((x + 1, y))].unwrap();
                    if right_node != this_node {
                        neighbours[this_node].set(right_node);
                        neighbours[right_node].set(this_node);
                    }
                }
                if y + 1 < board.rows() {
                    let down_node = node_id[board.index_of((x, y + 1))].unwrap();
                    if down_node != this_node {
                        neighbours[this_node].set(down_node);
                        neighbours[down_node].set(this_node);
                    }
                }
            }
        }

        // Step 5: per-color node bitsets.
        let color_count = colors.iter().map(|c| c.tag as usize).max().map_or(0, |m| m + 1);
        let mut color_sets = vec![Bitset::empty(node_count); color_count];
        for (node, color) in colors.iter().enumerate() {
            color_sets[color.tag as usize].set(node);
        }

        Graph { colors, neighbours, color_sets }
    }

    /// The node id of the region containing `pos`. `node_id` must have
    /// been built from the same board this graph was built from.
    pub fn node_at(board: &Board, node_id: &[NodeId], pos: Pos) -> NodeId {
        node_id[board.index_of(pos)]
    }

    /// Rebuilds the cell -> node-id map for a board, for callers (like the
    /// graph player) that need to find the start node without re-deriving
    /// the whole graph by hand. Cheap relative to `build` itself (same
    /// flood-fill pass), kept separate so `build` doesn't need to return
    /// it to callers who don't care.
    pub fn node_ids(board: &Board) -> Vec<NodeId> {
        let cell_count = board.cell_count();
        let mut node_id = vec![None; cell_count];
        let mut next_id = 0;

        for start_idx in 0..cell_count {
            if node_id[start_idx].is_some() {
                continue;
            }
            let pos = board.coords_of(start_idx);
            for idx in board.flood_region(pos) {
                node_id[idx] = Some(next_id);
            }
            next_id += 1;
        }

        node_id.into_iter().map(Option::unwrap).collect()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.node_count())
            .field("colors", &self.colors)
            .finish()
    }
}

/// Optional textual rendering of region ids, colors, and adjacency lists,
/// disabled by default and only reachable via the CLI's `--debug-graph`
/// flag.
pub fn print_debug(board: &Board, graph: &Graph) {
    let node_id = Graph::node_ids(board);

    println!("region ids:");
    for y in 0..board.rows() {
        for x in 0..board.cols() {
            print!("{:>3}", node_id[board.index_of((x, y))]);
        }
        println!();
    }

    println!("region colors:");
    for node in 0..graph.node_count() {
        println!("{:>3} -> {}", node, graph.color(node));
    }

    println!("adjacency:");
    for node in 0..graph.node_count() {
        let neighbours: Vec<_> = graph.neighbours(node).iter().collect();
        println!("{:>3} -> {:?}", node, neighbours);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn board(cells: &[u8], rows: usize) -> Board {
        Board::new(cells.iter().map(|&c| Color::new(c)).collect(), rows).unwrap()
    }

    #[test]
    fn partition_covers_every_cell() {
        let b = board(&[0, 1, 0, 1, 0, 1, 0, 1, 0], 3);
        let node_id = Graph::node_ids(&b);
        assert_eq!(node_id.len(), b.cell_count());

        let g = Graph::build(&b);
        for start_idx in 0..b.cell_count() {
            let pos = b.coords_of(start_idx);
            let expected_region = b.flood_region(pos);
            let node = node_id[start_idx];

            let mut actual_region: Vec<usize> =
                (0..b.cell_count()).filter(|&i| node_id[i] == node).collect();
            let mut expected_sorted = expected_region.clone();
            actual_region.sort();
            expected_sorted.sort();
            assert_eq!(actual_region, expected_sorted);
        }
        assert!(g.node_count() <= b.cell_count());
    }

    #[test]
    fn adjacency_is_symmetric_and_irreflexive() {
        let b = board(&[0, 0, 1, 1, 2, 2, 3, 3], 2);
        let g = Graph::build(&b);

        for a in 0..g.node_count() {
            assert!(!g.neighbours(a).test(a));
            for n in g.neighbours(a).iter() {
                assert!(g.neighbours(n).test(a));
            }
        }
    }

    #[test]
    fn color_sets_partition_nodes() {
        let b = board(&[0, 1, 0, 1, 0, 1, 0, 1, 0], 3);
        let g = Graph::build(&b);

        let mut seen = Bitset::empty(g.node_count());
        for c in 0..g.color_count() {
            let set = g.nodes_with_color(Color::new(c as u8));
            assert!(!set.intersects(&seen));
            seen.union_with(set);
        }
        assert_eq!(seen.popcount(), g.node_count());
    }

    #[test]
    fn s5_four_blocks() {
        #[rustfmt::skip]
        let b = board(&[
            0, 0, 1, 1,
            0, 0, 1, 1,
            2, 2, 3, 3,
            2, 2, 3, 3,
        ], 4);
        let g = Graph::build(&b);
        assert_eq!(g.node_count(), 4);
    }
}
