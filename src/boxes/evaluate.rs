//! Static evaluation of dots-and-boxes positions.
//!
//! Positive scores favor the machine.

use std::cmp::Ordering;

use super::game_state::{GameState, Player};

/// Points per claimed box. Dominates the control term so a real box always
/// outweighs a threatened one.
const BOX_WEIGHT: i32 = 100;

#[derive(Debug, PartialEq, Eq)]
pub enum GameEnding {
    MachineWins,
    HumanWins,
    Draw,
}

pub fn game_ending(state: &GameState) -> Option<GameEnding> {
    if !state.is_over() {
        return None;
    }
    Some(match state.machine_score().cmp(&state.human_score()) {
        Ordering::Greater => GameEnding::MachineWins,
        Ordering::Less => GameEnding::HumanWins,
        Ordering::Equal => GameEnding::Draw,
    })
}

/// Material plus control: the score difference, weighted, plus the boxes
/// with three sides drawn, credited to the side to move (it can claim them).
pub fn score(state: &GameState) -> i32 {
    let material = BOX_WEIGHT * (state.machine_score() - state.human_score());
    let ready = ready_boxes(state);
    match state.to_move() {
        Player::Machine => material + ready,
        Player::Human => material - ready,
    }
}

fn ready_boxes(state: &GameState) -> i32 {
    let mut count = 0;
    for row in 0..state.size() {
        for col in 0..state.size() {
            if state.owner(row, col).is_none() && state.sides_drawn(row, col) == 3 {
                count += 1;
            }
        }
    }
    count
}
