//! N-queens via pure depth-first backtracking: no heuristic, no ordering,
//! just feasibility checks against the ancestor chain.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::node::SearchNode;
use crate::traversal;

/// One placed queen, or the sentinel root before any placement. Children
/// are the feasible placements for the next row, built lazily and walked
/// through a cursor held on the parent.
#[derive(Clone)]
pub struct QueenNode(Rc<RefCell<NodeInner>>);

struct NodeInner {
    /// `None` for the root; otherwise a 1-based `(row, col)`.
    placement: Option<(u32, u32)>,
    size: u32,
    parent: Option<QueenNode>,
    children: Option<Vec<QueenNode>>,
    cursor: usize,
}

impl QueenNode {
    pub fn root(size: u32) -> Self {
        QueenNode(Rc::new(RefCell::new(NodeInner {
            placement: None,
            size,
            parent: None,
            children: None,
            cursor: 0,
        })))
    }

    fn placed(parent: &QueenNode, row: u32, col: u32) -> Self {
        let size = parent.0.borrow().size;
        QueenNode(Rc::new(RefCell::new(NodeInner {
            placement: Some((row, col)),
            size,
            parent: Some(parent.clone()),
            children: None,
            cursor: 0,
        })))
    }

    pub fn placement(&self) -> Option<(u32, u32)> {
        self.0.borrow().placement
    }

    fn row(&self) -> u32 {
        self.0.borrow().placement.map_or(0, |(row, _)| row)
    }

    /// A full board: one queen on every row.
    pub fn is_goal(&self) -> bool {
        self.row() == self.0.borrow().size
    }

    /// No shared column or diagonal with any queen on the ancestor chain;
    /// rows are distinct by construction.
    fn feasible(&self, row: u32, col: u32) -> bool {
        let mut cursor = Some(self.clone());
        while let Some(node) = cursor {
            if let Some((placed_row, placed_col)) = node.placement() {
                if placed_col == col
                    || placed_row + col == row + placed_col
                    || placed_row + placed_col == row + col
                {
                    return false;
                }
            }
            cursor = node.parent();
        }
        true
    }

    fn build_children(&self) {
        if self.0.borrow().children.is_some() {
            return;
        }
        let size = self.0.borrow().size;
        let next_row = self.row() + 1;
        let mut children = Vec::new();
        if next_row <= size {
            for col in 1..=size {
                if self.feasible(next_row, col) {
                    children.push(QueenNode::placed(self, next_row, col));
                }
            }
        }
        self.0.borrow_mut().children = Some(children);
    }
}

impl SearchNode for QueenNode {
    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.clone()
    }

    fn set_parent(&self, parent: Option<Self>) {
        self.0.borrow_mut().parent = parent;
    }

    fn first_child(&self) -> Option<Self> {
        self.build_children();
        let mut inner = self.0.borrow_mut();
        inner.cursor = 0;
        inner.children.as_ref()?.first().cloned()
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        let mut inner = parent.0.borrow_mut();
        inner.cursor += 1;
        let cursor = inner.cursor;
        inner.children.as_ref()?.get(cursor).cloned()
    }
}

/// One solution: the column of the queen on each row, 1-based.
pub type Solution = Vec<u32>;

#[derive(Debug)]
pub struct QueensReport {
    pub solutions: Vec<Solution>,
    pub nodes_searched: usize,
}

/// Enumerates every placement of `size` non-attacking queens.
pub fn solve(size: u32) -> QueensReport {
    let mut solutions = Vec::new();
    let mut nodes_searched = 0;

    for node in traversal::depth_first(QueenNode::root(size)) {
        nodes_searched += 1;
        if node.is_goal() {
            solutions.push(columns(&node));
        }
    }

    debug!(
        "{} solutions for size {} in {} nodes",
        solutions.len(),
        size,
        nodes_searched
    );
    QueensReport {
        solutions,
        nodes_searched,
    }
}

/// An ASCII board for one solution.
pub fn render(solution: &Solution) -> String {
    let size = solution.len();
    let mut board = String::new();
    for &col in solution.iter() {
        for candidate in 1..=size as u32 {
            board.push(if candidate == col { 'Q' } else { '.' });
            board.push(' ');
        }
        board.pop();
        board.push('\n');
    }
    board
}

fn columns(node: &QueenNode) -> Solution {
    let mut placements = Vec::new();
    let mut cursor = Some(node.clone());
    while let Some(current) = cursor {
        if let Some((_, col)) = current.placement() {
            placements.push(col);
        }
        cursor = current.parent();
    }
    placements.reverse();
    placements
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn conflict_free(solution: &Solution) -> bool {
        for i in 0..solution.len() {
            for j in i + 1..solution.len() {
                let (a, b) = (solution[i] as i64, solution[j] as i64);
                if a == b || (a - b).abs() == (j as i64 - i as i64) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn eight_queens_has_ninety_two_solutions() {
        let report = solve(8);
        assert_eq!(report.solutions.len(), 92);

        let distinct: HashSet<&Solution> = report.solutions.iter().collect();
        assert_eq!(distinct.len(), 92);

        for solution in &report.solutions {
            assert_eq!(solution.len(), 8);
            assert!(conflict_free(solution), "conflict in {:?}", solution);
        }
        assert!(report.nodes_searched > 92);
    }

    #[test]
    fn small_board_counts() {
        assert_eq!(solve(1).solutions.len(), 1);
        assert_eq!(solve(2).solutions.len(), 0);
        assert_eq!(solve(3).solutions.len(), 0);
        assert_eq!(solve(4).solutions.len(), 2);
        assert_eq!(solve(5).solutions.len(), 10);
        assert_eq!(solve(6).solutions.len(), 4);
    }

    #[test]
    fn render_marks_one_queen_per_row() {
        let board = render(&vec![2, 4, 1, 3]);
        assert_eq!(board, ". Q . .\n. . . Q\nQ . . .\n. . Q .\n");
    }
}
