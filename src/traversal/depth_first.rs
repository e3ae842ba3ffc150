use crate::node::SearchNode;

/// Depth-first (backtracking) traversal, yielding nodes in preorder.
///
/// Descends via `first_child` as long as possible; on a dead end it climbs
/// back up, asking each level for its next untried sibling, until one exists
/// or the root's parent is reached. This is the strategy behind exhaustive
/// backtracking and the minimax instance, where the ascent is exactly where
/// evaluations are folded into parents.
pub fn depth_first<N: SearchNode>(root: N) -> DepthFirst<N> {
    DepthFirst { next: Some(root) }
}

pub struct DepthFirst<N> {
    next: Option<N>,
}

impl<N: SearchNode> Iterator for DepthFirst<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next.take()?;

        self.next = current.first_child().or_else(|| {
            let mut cursor = Some(current.clone());
            while let Some(node) = cursor {
                if let Some(sibling) = node.next_sibling() {
                    return Some(sibling);
                }
                cursor = node.parent();
            }
            None
        });

        Some(current)
    }
}
