//! The minimax search node.
//!
//! Minimax and alpha-beta pruning are not a separate recursion here: they
//! run as side effects of plain depth-first enumeration. `first_child` grows
//! the game tree one ply at a time; `next_sibling` folds the just-finished
//! child's evaluation into its parent and consults the ancestor chain to
//! decide whether the remaining alternatives at this ply can be abandoned.
//! Exhausting the depth-first iterator leaves the best line and its expected
//! value recorded on the root.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::node::SearchNode;

use super::evaluate;
use super::game_state::{GameState, Line, Player};

/// Search configuration threaded through node construction.
#[derive(Clone, Copy, Debug)]
pub struct SearchLimits {
    /// Plies below the root at which positions are statically evaluated.
    pub depth_bound: u32,
    /// Alpha-beta toggle; disabling it leaves plain minimax.
    pub pruning: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            depth_bound: 4,
            pruning: true,
        }
    }
}

/// The best alternative recorded at a node so far: the line to play and the
/// minimax value backpropagated from the child that played it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Best {
    pub line: Line,
    pub evaluation: i32,
}

#[derive(Clone)]
pub struct BoxesNode(Rc<RefCell<NodeInner>>);

struct NodeInner {
    position: GameState,
    parent: Option<BoxesNode>,
    /// The side that drew the line leading into this position. For the root
    /// this is the opponent of the side to move.
    mover: Player,
    line_taken: Option<Line>,
    evaluation: i32,
    best: Option<Best>,
    /// Untried candidate lines at this ply; handed on from sibling to
    /// sibling as it is consumed.
    pending: Vec<Line>,
    depth: u32,
    limits: SearchLimits,
}

impl BoxesNode {
    pub fn root(position: GameState, limits: SearchLimits) -> Self {
        let mover = position.to_move().opponent();
        BoxesNode(Rc::new(RefCell::new(NodeInner {
            position,
            parent: None,
            mover,
            line_taken: None,
            evaluation: 0,
            best: None,
            pending: Vec::new(),
            depth: 0,
            limits,
        })))
    }

    pub fn evaluation(&self) -> i32 {
        self.0.borrow().evaluation
    }

    pub fn best(&self) -> Option<Best> {
        self.0.borrow().best
    }

    pub fn line_taken(&self) -> Option<Line> {
        self.0.borrow().line_taken
    }

    pub fn mover(&self) -> Player {
        self.0.borrow().mover
    }

    /// True when both handles refer to the same underlying node.
    pub fn same_node(&self, other: &BoxesNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Builds the node reached by drawing the first line in `pending` from
    /// `parent`'s position, consuming that candidate. The rest of the queue
    /// moves onto the new node for its future siblings.
    fn advance(parent: &BoxesNode, mut pending: Vec<Line>) -> Option<BoxesNode> {
        if pending.is_empty() {
            return None;
        }
        let line = pending.remove(0);

        let (mut position, depth, limits) = {
            let inner = parent.0.borrow();
            (inner.position.clone(), inner.depth + 1, inner.limits)
        };
        let played = position.apply(line).unwrap();

        Some(BoxesNode(Rc::new(RefCell::new(NodeInner {
            position,
            parent: Some(parent.clone()),
            mover: played.mover,
            line_taken: Some(line),
            evaluation: 0,
            best: None,
            pending,
            depth,
            limits,
        }))))
    }

    /// Minimax backpropagation. `self` has just been fully explored; fold
    /// its evaluation into the parent's recorded best. The side choosing
    /// among the parent's children is exactly the side that moved into
    /// `self`, so the comparison sense follows `mover`, not turn parity.
    fn propagate(&self, parent: &BoxesNode) {
        let (evaluation, mover, line) = {
            let inner = self.0.borrow();
            let line = inner
                .line_taken
                .expect("non-root node records the line it played");
            (inner.evaluation, inner.mover, line)
        };

        let mut parent_inner = parent.0.borrow_mut();
        let improved = match parent_inner.best {
            None => true,
            Some(best) => match mover {
                Player::Machine => evaluation > best.evaluation,
                Player::Human => evaluation < best.evaluation,
            },
        };
        if improved {
            parent_inner.evaluation = evaluation;
            parent_inner.best = Some(Best { line, evaluation });
            debug!("new best {} ({}) at depth {}", line, evaluation, parent_inner.depth);
        }
    }

    /// Alpha-beta cutoff: walks the ancestor chain from the grandparent up.
    /// If an ancestor optimizing in the opposite sense already records a
    /// value this subtree cannot beat, the untried alternatives at this ply
    /// are dead.
    fn should_prune(&self) -> bool {
        let (evaluation, mover) = {
            let inner = self.0.borrow();
            (inner.evaluation, inner.mover)
        };

        let mut ancestor = self.parent().and_then(|parent| parent.parent());
        while let Some(node) = ancestor {
            {
                let inner = node.0.borrow();
                if let Some(best) = inner.best {
                    let ancestor_chooser = inner.position.to_move();
                    let cutoff = match mover {
                        Player::Machine => {
                            ancestor_chooser == Player::Human && evaluation >= best.evaluation
                        }
                        Player::Human => {
                            ancestor_chooser == Player::Machine && evaluation <= best.evaluation
                        }
                    };
                    if cutoff {
                        return true;
                    }
                }
            }
            ancestor = node.parent();
        }
        false
    }
}

impl SearchNode for BoxesNode {
    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.clone()
    }

    fn set_parent(&self, parent: Option<Self>) {
        self.0.borrow_mut().parent = parent;
    }

    fn first_child(&self) -> Option<Self> {
        {
            let mut inner = self.0.borrow_mut();
            if inner.depth == inner.limits.depth_bound || inner.position.is_over() {
                inner.evaluation = evaluate::score(&inner.position);
                return None;
            }
        }
        let candidates = self.0.borrow().position.valid_moves();
        Self::advance(self, candidates)
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;

        self.propagate(&parent);

        if self.0.borrow().limits.pruning && self.should_prune() {
            debug!(
                "pruned alternatives after {} at depth {}",
                self.0.borrow().line_taken.expect("non-root"),
                self.0.borrow().depth
            );
            return None;
        }

        let pending = std::mem::take(&mut self.0.borrow_mut().pending);
        Self::advance(&parent, pending)
    }
}
