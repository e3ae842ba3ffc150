//! Dots-and-boxes: the two-player, turn-alternating instance of the search
//! engine. Minimax with alpha-beta pruning runs entirely inside a plain
//! depth-first traversal; there is no separate minimax recursion.

pub mod engine;
pub mod evaluate;
pub mod game_state;
pub mod node;

#[cfg(test)]
mod tests;

pub use engine::{Engine, EngineConfig, EngineError, SearchError, SearchStats};
pub use evaluate::GameEnding;
pub use game_state::{GameState, Line, MoveError, Orientation, Played, Player};
pub use node::{Best, BoxesNode, SearchLimits};
