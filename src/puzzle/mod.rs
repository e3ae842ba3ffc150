//! The 8-puzzle: the heuristic-ordered, single-agent instance of the search
//! engine, solved optimally with A*.

pub mod node;
pub mod solver;
pub mod tiles;


pub use node::PuzzleNode;
pub use solver::{solve, PuzzleError, Solution};
pub use tiles::{ParseTilesError, Tiles};
