use std::cell::RefCell;
use std::rc::Rc;

use crate::node::SearchNode;

use super::{a_star, beam, best_first, breadth_first, depth_first, greedy};

/// Scripted test tree: the shape is a fan-out count per level, so the full
/// node set is known in advance. Each node carries a weight (its child
/// index, by default) for the ordered strategies.
#[derive(Clone)]
struct FanNode(Rc<RefCell<FanInner>>);

struct FanInner {
    fanout: Rc<Vec<usize>>,
    level: usize,
    path: Vec<usize>,
    weight: usize,
    parent: Option<FanNode>,
    next_child: usize,
}

impl FanNode {
    fn root(fanout: &[usize]) -> Self {
        FanNode(Rc::new(RefCell::new(FanInner {
            fanout: Rc::new(fanout.to_vec()),
            level: 0,
            path: Vec::new(),
            weight: 0,
            parent: None,
            next_child: 0,
        })))
    }

    fn leaf(weight: usize) -> Self {
        let node = Self::root(&[]);
        node.0.borrow_mut().weight = weight;
        node
    }

    fn child(&self, index: usize) -> Self {
        let inner = self.0.borrow();
        let mut path = inner.path.clone();
        path.push(index);
        FanNode(Rc::new(RefCell::new(FanInner {
            fanout: inner.fanout.clone(),
            level: inner.level + 1,
            path,
            weight: index,
            parent: Some(self.clone()),
            next_child: 0,
        })))
    }

    fn label(&self) -> String {
        let inner = self.0.borrow();
        if inner.path.is_empty() {
            "r".to_string()
        } else {
            inner
                .path
                .iter()
                .map(|index| index.to_string())
                .collect::<Vec<_>>()
                .join(".")
        }
    }

    fn weight(&self) -> usize {
        self.0.borrow().weight
    }

    fn level(&self) -> usize {
        self.0.borrow().level
    }
}

impl SearchNode for FanNode {
    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.clone()
    }

    fn set_parent(&self, parent: Option<Self>) {
        self.0.borrow_mut().parent = parent;
    }

    fn first_child(&self) -> Option<Self> {
        let width = {
            let inner = self.0.borrow();
            match inner.fanout.get(inner.level) {
                Some(&width) => width,
                None => return None,
            }
        };
        if width == 0 {
            return None;
        }
        self.0.borrow_mut().next_child = 1;
        Some(self.child(0))
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        let (width, index) = {
            let inner = parent.0.borrow();
            (inner.fanout[inner.level], inner.next_child)
        };
        if index >= width {
            return None;
        }
        parent.0.borrow_mut().next_child += 1;
        Some(parent.child(index))
    }
}

fn labels<I: Iterator<Item = FanNode>>(nodes: I) -> Vec<String> {
    nodes.map(|node| node.label()).collect()
}

fn by_weight(a: &FanNode, b: &FanNode) -> std::cmp::Ordering {
    a.weight().cmp(&b.weight())
}

fn by_weight_desc(a: &FanNode, b: &FanNode) -> std::cmp::Ordering {
    b.weight().cmp(&a.weight())
}

#[test]
fn depth_first_yields_preorder() {
    let yielded = labels(depth_first(FanNode::root(&[3, 2])));
    assert_eq!(
        yielded,
        vec!["r", "0", "0.0", "0.1", "1", "1.0", "1.1", "2", "2.0", "2.1"]
    );
}

#[test]
fn depth_first_parent_yielded_strictly_earlier_and_once() {
    let mut seen: Vec<String> = Vec::new();
    for node in depth_first(FanNode::root(&[3, 3, 2])) {
        if let Some(parent) = node.parent() {
            assert!(
                seen.contains(&parent.label()),
                "parent of {} not yielded before it",
                node.label()
            );
        }
        assert!(!seen.contains(&node.label()), "duplicate {}", node.label());
        seen.push(node.label());
    }
    assert_eq!(seen.len(), 1 + 3 + 9 + 18);
}

#[test]
fn breadth_first_yields_level_order_and_terminates() {
    let yielded = labels(breadth_first(FanNode::root(&[3, 2])));
    assert_eq!(
        yielded,
        vec!["r", "0", "1", "2", "0.0", "0.1", "1.0", "1.1", "2.0", "2.1"]
    );
}

#[test]
fn breadth_first_yield_count_equals_tree_size() {
    assert_eq!(breadth_first(FanNode::root(&[4, 3, 2])).count(), 1 + 4 + 12 + 24);
    assert_eq!(best_first(FanNode::root(&[4, 3, 2]), by_weight).count(), 1 + 4 + 12 + 24);
}

#[test]
fn best_first_sorts_each_generation() {
    let yielded = labels(best_first(FanNode::root(&[3, 2]), by_weight_desc));
    assert_eq!(
        yielded,
        vec!["r", "2", "1", "0", "2.1", "1.1", "0.1", "2.0", "1.0", "0.0"]
    );
}

#[test]
fn greedy_follows_minimum_without_backtracking() {
    let yielded = labels(greedy(FanNode::root(&[3, 2]), by_weight));
    assert_eq!(yielded, vec!["r", "0", "0.0"]);
}

#[test]
fn beam_never_holds_more_than_width_per_generation() {
    let width = 2;
    let mut per_level = [0usize; 3];
    for node in beam(FanNode::root(&[4, 2]), by_weight, width) {
        per_level[node.level()] += 1;
    }
    assert_eq!(per_level[0], 1);
    assert!(per_level.iter().all(|&count| count <= width));
    // Four children are generated at level one; only the best two survive.
    assert_eq!(per_level[1], width);
    assert_eq!(per_level[2], width);
}

#[test]
fn beam_keeps_the_best_of_each_generation() {
    let yielded = labels(beam(FanNode::root(&[4, 2]), by_weight, 2));
    assert_eq!(yielded, vec!["r", "0", "1", "0.0", "1.0"]);
}

#[test]
fn a_star_extracts_global_minimum_each_time() {
    let yielded = labels(a_star(FanNode::root(&[3, 2]), by_weight).take(5));
    assert_eq!(yielded, vec!["r", "0", "0.0", "1", "1.0"]);
}

#[test]
fn a_star_candidate_cutoff() {
    let mut open = a_star(FanNode::root(&[3, 2]), by_weight);
    let root = open.next().expect("root should be yielded first");

    // Weight 0 is no worse than anything still open.
    assert!(open.candidate_is_optimal(&root));
    // A costly candidate is beaten by the open minimum.
    assert!(!open.candidate_is_optimal(&FanNode::leaf(5)));

    // Exhausted open list: the cutoff never fires, iteration just ends.
    let mut drained = a_star(FanNode::root(&[]), by_weight);
    let only = drained.next().expect("lone root");
    assert!(drained.next().is_none());
    assert!(!drained.candidate_is_optimal(&only));
}
