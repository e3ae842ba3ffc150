//! Sudoku command - solve a grid with backtracking.

use structopt::StructOpt;
use treesearch::sudoku::{self, Grid};

use super::Command;

#[derive(StructOpt)]
pub struct SudokuArgs {
    /// 81 cells in row-major order: digits, with `0` or `.` for empty.
    #[structopt(long)]
    pub givens: Option<String>,
}

impl Command for SudokuArgs {
    fn execute(self) {
        let source = self.givens.as_deref().unwrap_or(sudoku::DEFAULT_PUZZLE);
        let givens: Grid = match source.parse() {
            Ok(grid) => grid,
            Err(error) => {
                eprintln!("invalid puzzle: {}", error);
                return;
            }
        };

        println!("{}", givens);

        match sudoku::solve(givens) {
            Some(solution) => {
                let placements = sudoku::solution_path(&solution).len();
                println!("solved with {} placements:", placements);
                println!("{}", solution.grid());
            }
            None => eprintln!("the givens admit no solution"),
        }
    }
}
