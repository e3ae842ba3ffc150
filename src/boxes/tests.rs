use crate::node::SearchNode;
use crate::traversal;

use super::engine::{Engine, EngineConfig, SearchError};
use super::evaluate::{self, GameEnding};
use super::game_state::{GameState, Line, MoveError, Player};
use super::node::{Best, BoxesNode, SearchLimits};

fn state_after(size: usize, lines: &[Line]) -> GameState {
    let mut state = GameState::new(size);
    for &line in lines {
        state.apply(line).unwrap();
    }
    state
}

/// A 2x2 board where the box at (0, 0) has three sides drawn and the
/// machine is to move.
fn machine_can_claim_a_box() -> GameState {
    state_after(
        2,
        &[
            Line::horizontal(0, 0), // human
            Line::horizontal(1, 0), // machine
            Line::vertical(0, 0),   // human
        ],
    )
}

#[test]
fn completing_a_box_keeps_the_turn() {
    let mut state = state_after(
        1,
        &[
            Line::horizontal(0, 0),
            Line::horizontal(1, 0),
            Line::vertical(0, 0),
        ],
    );
    assert_eq!(state.to_move(), Player::Machine);

    let played = state.apply(Line::vertical(0, 1)).unwrap();
    assert_eq!(played.mover, Player::Machine);
    assert_eq!(played.boxes_completed, 1);
    assert_eq!(played.next_to_move, Player::Machine);

    assert_eq!(state.machine_score(), 1);
    assert!(state.is_over());
    assert_eq!(evaluate::game_ending(&state), Some(GameEnding::MachineWins));
}

#[test]
fn one_line_can_complete_two_boxes() {
    // Top row of a 2x2 board, fully framed except the shared vertical.
    let mut state = state_after(
        2,
        &[
            Line::horizontal(0, 0),
            Line::horizontal(0, 1),
            Line::horizontal(1, 0),
            Line::horizontal(1, 1),
            Line::vertical(0, 0),
            Line::vertical(0, 2),
        ],
    );
    let mover = state.to_move();
    let played = state.apply(Line::vertical(0, 1)).unwrap();
    assert_eq!(played.boxes_completed, 2);
    assert_eq!(played.next_to_move, mover);
}

#[test]
fn apply_rejects_illegal_lines() {
    let mut state = state_after(1, &[Line::horizontal(0, 0)]);
    assert_eq!(
        state.apply(Line::horizontal(0, 0)),
        Err(MoveError::AlreadyDrawn(Line::horizontal(0, 0)))
    );
    assert_eq!(
        state.apply(Line::horizontal(2, 0)),
        Err(MoveError::OutOfBounds(Line::horizontal(2, 0)))
    );
}

#[test]
fn valid_moves_shrink_as_lines_are_drawn() {
    let state = GameState::new(2);
    assert_eq!(state.valid_moves().len(), 12);

    let state = machine_can_claim_a_box();
    assert_eq!(state.valid_moves().len(), 9);
    assert!(!state.valid_moves().contains(&Line::horizontal(0, 0)));
}

#[test]
fn evaluation_credits_ready_boxes_to_the_side_to_move() {
    let state = machine_can_claim_a_box();
    // No boxes claimed yet; one box is one line from closed and the
    // machine moves next.
    assert_eq!(evaluate::score(&state), 1);

    let mut finished = state_after(
        1,
        &[
            Line::horizontal(0, 0),
            Line::horizontal(1, 0),
            Line::vertical(0, 0),
        ],
    );
    finished.apply(Line::vertical(0, 1)).unwrap();
    assert_eq!(evaluate::score(&finished), 100);
}

#[test]
fn leaf_node_records_static_evaluation() {
    let mut state = state_after(
        1,
        &[
            Line::horizontal(0, 0),
            Line::horizontal(1, 0),
            Line::vertical(0, 0),
        ],
    );
    state.apply(Line::vertical(0, 1)).unwrap();

    let root = BoxesNode::root(state.clone(), SearchLimits::default());
    assert!(root.first_child().is_none());
    assert_eq!(root.evaluation(), evaluate::score(&state));
}

#[test]
fn best_move_takes_the_ready_box() {
    let mut engine = Engine::with_config(EngineConfig {
        search_depth: 4,
        starting_position: machine_can_claim_a_box(),
        pruning: true,
    });

    let best = engine.best_move().unwrap();
    assert_eq!(best, Line::vertical(0, 1));
    assert!(engine.search_stats().nodes_visited > 0);
}

#[test]
fn no_moves_at_the_root_is_reported_not_thrown() {
    let mut state = state_after(
        1,
        &[
            Line::horizontal(0, 0),
            Line::horizontal(1, 0),
            Line::vertical(0, 0),
        ],
    );
    state.apply(Line::vertical(0, 1)).unwrap();

    let mut engine = Engine::with_config(EngineConfig {
        search_depth: 4,
        starting_position: state,
        pruning: true,
    });
    assert!(matches!(
        engine.best_move(),
        Err(SearchError::NoAvailableMoves)
    ));
}

fn search(state: &GameState, limits: SearchLimits) -> (usize, Option<Best>) {
    let root = BoxesNode::root(state.clone(), limits);
    let visited = traversal::depth_first(root.clone()).count();
    (visited, root.best())
}

#[test]
fn pruning_visits_fewer_nodes_and_agrees_with_plain_minimax() {
    let state = GameState::new(2);

    let (pruned_count, pruned_best) = search(
        &state,
        SearchLimits {
            depth_bound: 3,
            pruning: true,
        },
    );
    let (full_count, full_best) = search(
        &state,
        SearchLimits {
            depth_bound: 3,
            pruning: false,
        },
    );

    assert!(
        pruned_count < full_count,
        "alpha-beta visited {} nodes, plain minimax {}",
        pruned_count,
        full_count
    );
    assert_eq!(pruned_best, full_best);
}

#[test]
fn dominant_line_is_found_from_a_forced_position() {
    // Machine claims the ready box and the extra turn lets it keep the
    // material edge whatever the human answers.
    let (_, best) = search(
        &machine_can_claim_a_box(),
        SearchLimits {
            depth_bound: 5,
            pruning: true,
        },
    );
    let best = best.expect("a move must be recorded");
    assert_eq!(best.line, Line::vertical(0, 1));
    assert!(best.evaluation > 0);
}

#[test]
fn depth_first_preorder_holds_for_game_nodes() {
    let root = BoxesNode::root(
        GameState::new(1),
        SearchLimits {
            depth_bound: 2,
            pruning: false,
        },
    );
    let mut yielded: Vec<BoxesNode> = Vec::new();
    for node in traversal::depth_first(root) {
        if let Some(parent) = node.parent() {
            assert!(
                yielded.iter().any(|seen| seen.same_node(&parent)),
                "parent must be yielded before its child"
            );
        }
        assert!(!yielded.iter().any(|seen| seen.same_node(&node)));
        yielded.push(node);
    }
    // 1 root + 4 first-ply nodes + 4 * 3 second-ply nodes.
    assert_eq!(yielded.len(), 17);
}
