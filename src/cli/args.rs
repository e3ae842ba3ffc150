//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    play::PlayArgs, puzzle::PuzzleArgs, queens::QueensArgs, sudoku::SudokuArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "treesearch",
    about = "Lazy state-space search demos: dots-and-boxes, the 8-puzzle, N-queens, and Sudoku"
)]
pub enum TreeSearch {
    #[structopt(
        name = "play",
        about = "Play dots-and-boxes against the computer, which searches for its move with minimax and alpha-beta pruning at the given `--depth` (default: 4). Moves are entered as `h ROW COL` or `v ROW COL`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "queens",
        about = "Enumerate every N-queens solution with depth-first backtracking for the given `--size` (default: 8)."
    )]
    Queens(QueensArgs),
    #[structopt(
        name = "sudoku",
        about = "Solve a Sudoku grid with depth-first backtracking. Provide the givens as an 81-character string with `--givens` (digits, with `0` or `.` for empty cells), or omit it to solve the built-in puzzle."
    )]
    Sudoku(SudokuArgs),
    #[structopt(
        name = "puzzle",
        about = "Solve an 8-puzzle arrangement optimally with A*. Provide `--tiles` as a comma-separated list with 0 for the blank, or let `--scramble` generate a random solvable instance."
    )]
    Puzzle(PuzzleArgs),
}

impl crate::cli::commands::Command for TreeSearch {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Queens(cmd),
            Sudoku(cmd),
            Puzzle(cmd),
        }
    }
}
