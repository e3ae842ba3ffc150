//! Engine facade: owns the authoritative game state and runs searches
//! against clones of it.

use log::debug;
use thiserror::Error;

use crate::traversal;

use super::evaluate::{self, GameEnding};
use super::game_state::{GameState, Line, MoveError, Played};
use super::node::{BoxesNode, SearchLimits};

#[derive(Clone)]
pub struct EngineConfig {
    pub search_depth: u32,
    pub starting_position: GameState,
    pub pruning: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            search_depth: 4,
            starting_position: GameState::new(4),
            pruning: true,
        }
    }
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("game is over")]
    GameOver,
    #[error("move error: {0}")]
    Move(#[from] MoveError),
    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

/// Statistics from the most recent search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    pub nodes_visited: usize,
    pub best_evaluation: Option<i32>,
}

pub struct Engine {
    state: GameState,
    limits: SearchLimits,
    stats: SearchStats,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Engine {
            state: config.starting_position,
            limits: SearchLimits {
                depth_bound: config.search_depth,
                pruning: config.pruning,
            },
            stats: SearchStats::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn search_stats(&self) -> SearchStats {
        self.stats
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        evaluate::game_ending(&self.state)
    }

    /// Searches the current position for the side to move's best line.
    /// Driving the depth-first iterator to exhaustion is the whole
    /// algorithm; afterwards the root's bookkeeping holds the answer.
    pub fn best_move(&mut self) -> Result<Line, SearchError> {
        let root = BoxesNode::root(self.state.clone(), self.limits);

        let mut nodes_visited = 0;
        for _ in traversal::depth_first(root.clone()) {
            nodes_visited += 1;
        }

        self.stats = SearchStats {
            nodes_visited,
            best_evaluation: root.best().map(|best| best.evaluation),
        };
        debug!(
            "searched {} nodes at depth bound {}",
            nodes_visited, self.limits.depth_bound
        );

        root.best()
            .map(|best| best.line)
            .ok_or(SearchError::NoAvailableMoves)
    }

    /// Applies a line for whichever side is to move.
    pub fn play_line(&mut self, line: Line) -> Result<Played, EngineError> {
        if self.state.is_over() {
            return Err(EngineError::GameOver);
        }
        Ok(self.state.apply(line)?)
    }
}
