//! Puzzle command - solve an 8-puzzle arrangement with A*.

use structopt::StructOpt;
use treesearch::puzzle::{self, Tiles};

use super::Command;

#[derive(StructOpt)]
pub struct PuzzleArgs {
    /// Comma-separated tiles in row-major order, 0 for the blank.
    #[structopt(long, conflicts_with = "scramble")]
    pub tiles: Option<String>,
    /// Scramble the solved board with this many random moves.
    #[structopt(long, default_value = "12")]
    pub scramble: usize,
}

impl Command for PuzzleArgs {
    fn execute(self) {
        let start: Tiles = match &self.tiles {
            Some(raw) => match raw.parse() {
                Ok(tiles) => tiles,
                Err(error) => {
                    eprintln!("invalid tiles: {}", error);
                    return;
                }
            },
            None => Tiles::scrambled(&mut rand::thread_rng(), self.scramble),
        };

        println!("{}", start);

        match puzzle::solve(start) {
            Ok(solution) => {
                for tiles in solution.path.iter().skip(1) {
                    println!("{}", tiles);
                }
                println!(
                    "solved in {} moves, {} nodes searched",
                    solution.moves, solution.nodes_searched
                );
            }
            Err(error) => eprintln!("{}", error),
        }
    }
}
