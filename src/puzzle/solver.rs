//! A* driver for the 8-puzzle.

use log::debug;
use thiserror::Error;

use crate::traversal;

use super::node::PuzzleNode;
use super::tiles::Tiles;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("puzzle is not solvable from this arrangement")]
    Unsolvable,
}

/// An optimal solution: the arrangement sequence from start to goal.
#[derive(Debug)]
pub struct Solution {
    pub path: Vec<Tiles>,
    pub moves: u32,
    pub nodes_searched: usize,
}

/// Searches for the shortest move sequence from `start` to the goal.
///
/// The goal is accepted only once no node on the open list can still beat
/// it, so with the admissible Manhattan estimate the returned path is
/// cost-optimal.
pub fn solve(start: Tiles) -> Result<Solution, PuzzleError> {
    if !start.is_solvable() {
        return Err(PuzzleError::Unsolvable);
    }

    let root = PuzzleNode::root(start);
    let mut open = traversal::a_star(root, PuzzleNode::compare);
    let mut solution: Option<PuzzleNode> = None;
    let mut nodes_searched = 0;

    while let Some(node) = open.next() {
        nodes_searched += 1;

        if let Some(found) = &solution {
            if open.candidate_is_optimal(found) {
                break;
            }
        }

        if node.moves_to_goal() == 0 {
            let better = solution
                .as_ref()
                .map_or(true, |found| found.moves_from_start() > node.moves_from_start());
            if better {
                solution = Some(node);
            }
        }
    }

    let found = solution.ok_or(PuzzleError::Unsolvable)?;
    debug!(
        "a* searched {} nodes for a {}-move solution",
        nodes_searched,
        found.moves_from_start()
    );
    Ok(Solution {
        moves: found.moves_from_start(),
        path: found.path_from_start(),
        nodes_searched,
    })
}
