//! Queens command - enumerate N-queens solutions.

use structopt::StructOpt;
use treesearch::queens;

use super::Command;

#[derive(StructOpt)]
pub struct QueensArgs {
    #[structopt(short, long, default_value = "8")]
    pub size: u32,
    /// Print every solution board, not just the counts.
    #[structopt(long)]
    pub print: bool,
}

impl Command for QueensArgs {
    fn execute(self) {
        let report = queens::solve(self.size);

        if self.print {
            for (index, solution) in report.solutions.iter().enumerate() {
                println!("solution {}:", index + 1);
                println!("{}", queens::render(solution));
            }
        }

        println!(
            "{} solutions on a {}x{} board",
            report.solutions.len(),
            self.size,
            self.size
        );
        println!("{} nodes searched", report.nodes_searched);
    }
}
