//! The node capability contract shared by every search domain.

/// A lazily-enumerated node in an implicit search tree.
///
/// Implementors are cheap-to-clone handles (`Rc`-backed): cloning a node
/// yields another handle to the same underlying state, and enumeration
/// progress is shared between handles. The traversal strategies in
/// [`crate::traversal`] drive arbitrary domains through this contract alone;
/// they never inspect the wrapped state.
///
/// Enumeration is single-use: `first_child` and `next_sibling` consume the
/// node's candidate queue as they go, so a node cannot be re-enumerated from
/// scratch.
pub trait SearchNode: Clone {
    /// The owning ancestor, or `None` for the root of the tree.
    fn parent(&self) -> Option<Self>;

    /// Reattaches this node to a different parent. Sibling construction
    /// reparents a node to the one logical parent it shares with its
    /// predecessor.
    fn set_parent(&self, parent: Option<Self>);

    /// Extends the current state by one ply, returning the first child.
    ///
    /// Returns `None` when the state is terminal: the goal is reached, no
    /// legal moves remain, or a domain cutoff (such as a depth bound)
    /// applies. May record evaluation data on `self` as a side effect.
    fn first_child(&self) -> Option<Self>;

    /// Produces the next untried alternative at the same ply, under the
    /// same parent.
    ///
    /// Returns `None` when the alternatives are exhausted. Domains may use
    /// this call to write bookkeeping into the parent, or to abandon the
    /// remaining alternatives early; alpha-beta pruning does both.
    fn next_sibling(&self) -> Option<Self>;
}
