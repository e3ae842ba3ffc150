use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::TreeSearch;

fn main() {
    env_logger::init();
    TreeSearch::from_args().execute();
}
