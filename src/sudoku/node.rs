//! The backtracking search node for Sudoku.

use std::cell::RefCell;
use std::rc::Rc;

use crate::node::SearchNode;

use super::grid::Grid;

/// One digit placed into the first empty cell of the parent grid. The
/// placement doubles as the sibling cursor: the next alternative resumes
/// from the digit after the one this node tried.
#[derive(Clone)]
pub struct SudokuNode(Rc<RefCell<NodeInner>>);

struct NodeInner {
    grid: Grid,
    parent: Option<SudokuNode>,
    /// First empty cell of `grid`; `None` once the grid is complete.
    empty: Option<(usize, usize)>,
    /// The `(row, col, digit)` that produced this node from its parent.
    placed: Option<(usize, usize, u8)>,
}

impl SudokuNode {
    pub fn root(grid: Grid) -> Self {
        let empty = grid.first_empty();
        SudokuNode(Rc::new(RefCell::new(NodeInner {
            grid,
            parent: None,
            empty,
            placed: None,
        })))
    }

    fn place(parent: &SudokuNode, row: usize, col: usize, digit: u8) -> Self {
        let mut grid = parent.0.borrow().grid;
        grid.set(row, col, digit);
        let empty = grid.first_empty();
        SudokuNode(Rc::new(RefCell::new(NodeInner {
            grid,
            parent: Some(parent.clone()),
            empty,
            placed: Some((row, col, digit)),
        })))
    }

    pub fn grid(&self) -> Grid {
        self.0.borrow().grid
    }

    pub fn placed(&self) -> Option<(usize, usize, u8)> {
        self.0.borrow().placed
    }

    /// A completed grid: no empty cell remains.
    pub fn is_goal(&self) -> bool {
        self.0.borrow().empty.is_none()
    }

    /// Tries digits `from..=9` in `parent`'s first empty cell, returning a
    /// node for the first that fits.
    fn try_digits(parent: &SudokuNode, from: u8) -> Option<SudokuNode> {
        let (row, col) = parent.0.borrow().empty?;
        let grid = parent.0.borrow().grid;
        for digit in from..=9 {
            if grid.placement_fits(row, col, digit) {
                return Some(Self::place(parent, row, col, digit));
            }
        }
        None
    }
}

impl SearchNode for SudokuNode {
    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.clone()
    }

    fn set_parent(&self, parent: Option<Self>) {
        self.0.borrow_mut().parent = parent;
    }

    fn first_child(&self) -> Option<Self> {
        Self::try_digits(self, 1)
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        let from = self
            .0
            .borrow()
            .placed
            .map_or(1, |(_, _, digit)| digit + 1);
        Self::try_digits(&parent, from)
    }
}
