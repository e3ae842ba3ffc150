//! Sudoku via pure depth-first backtracking over the first-empty-cell
//! slot order.

pub mod grid;
pub mod node;


pub use grid::{Grid, ParseGridError};
pub use node::SudokuNode;

use log::debug;

use crate::node::SearchNode;
use crate::traversal;

/// The puzzle the solver ships with; it has a unique solution.
pub const DEFAULT_PUZZLE: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

/// Depth-first backtracking to the first completed grid, or `None` when the
/// givens admit no solution.
pub fn solve(grid: Grid) -> Option<SudokuNode> {
    let mut nodes_searched = 0;
    let solution = traversal::depth_first(SudokuNode::root(grid)).find(|node| {
        nodes_searched += 1;
        node.is_goal()
    });
    debug!("searched {} nodes", nodes_searched);
    solution
}

/// The `(row, col, digit)` placements leading from the givens to
/// `solution`, in application order.
pub fn solution_path(solution: &SudokuNode) -> Vec<(usize, usize, u8)> {
    let mut path = Vec::new();
    let mut cursor = Some(solution.clone());
    while let Some(node) = cursor {
        if let Some(placed) = node.placed() {
            path.push(placed);
        }
        cursor = node.parent();
    }
    path.reverse();
    path
}
