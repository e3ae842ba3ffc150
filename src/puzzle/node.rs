//! The A* search node for the 8-puzzle.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::node::SearchNode;

use super::tiles::Tiles;

/// One arrangement on the search frontier, carrying the path cost so far
/// and the Manhattan estimate of the cost remaining.
#[derive(Clone)]
pub struct PuzzleNode(Rc<RefCell<NodeInner>>);

struct NodeInner {
    tiles: Tiles,
    parent: Option<PuzzleNode>,
    /// Untried blank moves out of this arrangement; children are produced
    /// by consuming this queue front-first.
    pending: SmallVec<[(usize, usize); 4]>,
    moves_from_start: u32,
    moves_to_goal: u32,
}

impl PuzzleNode {
    pub fn root(tiles: Tiles) -> Self {
        Self::build(tiles, None)
    }

    fn build(tiles: Tiles, parent: Option<PuzzleNode>) -> Self {
        let moves_from_start = parent
            .as_ref()
            .map_or(0, |node| node.0.borrow().moves_from_start + 1);
        let pending = tiles.legal_blank_moves();
        let moves_to_goal = tiles.manhattan_to_goal();
        PuzzleNode(Rc::new(RefCell::new(NodeInner {
            tiles,
            parent,
            pending,
            moves_from_start,
            moves_to_goal,
        })))
    }

    pub fn tiles(&self) -> Tiles {
        self.0.borrow().tiles
    }

    pub fn moves_from_start(&self) -> u32 {
        self.0.borrow().moves_from_start
    }

    pub fn moves_to_goal(&self) -> u32 {
        self.0.borrow().moves_to_goal
    }

    /// The open-list ordering key: path cost plus estimate.
    pub fn total_cost(&self) -> u32 {
        let inner = self.0.borrow();
        inner.moves_from_start + inner.moves_to_goal
    }

    /// Comparison for the ordered strategies: `total_cost` ascending; ties
    /// fall back to insertion order because the open-list sort is stable.
    pub fn compare(a: &PuzzleNode, b: &PuzzleNode) -> Ordering {
        a.total_cost().cmp(&b.total_cost())
    }

    /// The arrangement sequence from the start to this node.
    pub fn path_from_start(&self) -> Vec<Tiles> {
        let mut path = Vec::new();
        let mut cursor = Some(self.clone());
        while let Some(node) = cursor {
            path.push(node.tiles());
            cursor = node.parent();
        }
        path.reverse();
        path
    }

    /// True if this arrangement already appears on the ancestor chain;
    /// used to reject moves that walk straight back into a visited state.
    fn occurred(&self) -> bool {
        let tiles = self.0.borrow().tiles;
        let mut cursor = self.parent();
        while let Some(node) = cursor {
            if node.0.borrow().tiles == tiles {
                return true;
            }
            cursor = node.parent();
        }
        false
    }

    /// Pops blank moves off `source` until one produces an arrangement not
    /// already on the ancestor chain.
    fn produce(source: &PuzzleNode) -> Option<PuzzleNode> {
        loop {
            let target = {
                let mut inner = source.0.borrow_mut();
                if inner.pending.is_empty() {
                    return None;
                }
                inner.pending.remove(0)
            };
            let tiles = source.0.borrow().tiles.moved(target);
            let child = Self::build(tiles, Some(source.clone()));
            if !child.occurred() {
                return Some(child);
            }
        }
    }
}

impl SearchNode for PuzzleNode {
    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.clone()
    }

    fn set_parent(&self, parent: Option<Self>) {
        self.0.borrow_mut().parent = parent;
    }

    fn first_child(&self) -> Option<Self> {
        if self.0.borrow().moves_to_goal == 0 {
            return None;
        }
        Self::produce(self)
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        Self::produce(&parent)
    }
}
