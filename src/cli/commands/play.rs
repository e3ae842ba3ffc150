//! Play command - dots-and-boxes against the engine.

use std::io;

use once_cell::sync::Lazy;
use regex::Regex;
use structopt::StructOpt;
use treesearch::boxes::{Engine, EngineConfig, GameEnding, GameState, Line, Player};

use super::Command;

static LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([hv])\s+(\d+)\s+(\d+)$").expect("LINE_RE regex should be valid"));

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u32,
    #[structopt(short, long, default_value = "4")]
    pub size: usize,
    /// Let the computer draw the first line.
    #[structopt(long)]
    pub machine_first: bool,
}

enum Input {
    Line(Line),
    Quit,
}

impl Input {
    fn parse(input: &str) -> Result<Input, &'static str> {
        let trimmed = input.trim();
        if trimmed == "q" || trimmed == "quit" {
            return Ok(Input::Quit);
        }

        let caps = LINE_RE
            .captures(trimmed)
            .ok_or("expected `h ROW COL`, `v ROW COL`, or `q`")?;
        let row: usize = caps[2].parse().map_err(|_| "row is not a number")?;
        let col: usize = caps[3].parse().map_err(|_| "column is not a number")?;

        Ok(Input::Line(match &caps[1] {
            "h" => Line::horizontal(row, col),
            _ => Line::vertical(row, col),
        }))
    }
}

impl Command for PlayArgs {
    fn execute(self) {
        let mut starting_position = GameState::new(self.size);
        if self.machine_first {
            starting_position.set_to_move(Player::Machine);
        }
        let mut engine = Engine::with_config(EngineConfig {
            search_depth: self.depth,
            starting_position,
            pruning: true,
        });

        println!("{}", engine.state());
        println!("Enter moves as `h ROW COL` or `v ROW COL` (`q` to quit).");

        loop {
            if let Some(ending) = engine.check_game_over() {
                match ending {
                    GameEnding::MachineWins => println!("the machine wins!"),
                    GameEnding::HumanWins => println!("you win!"),
                    GameEnding::Draw => println!("draw!"),
                }
                break;
            }

            if engine.state().to_move() == Player::Human {
                println!("Enter your move:");

                let mut input = String::new();
                match io::stdin().read_line(&mut input) {
                    Ok(0) => break,
                    Ok(_) => (),
                    Err(error) => {
                        println!("error: {}", error);
                        continue;
                    }
                }

                let line = match Input::parse(&input) {
                    Ok(Input::Line(line)) => line,
                    Ok(Input::Quit) => break,
                    Err(message) => {
                        println!("failed to parse move `{}`: {}", input.trim_end(), message);
                        continue;
                    }
                };

                match engine.play_line(line) {
                    Ok(played) => {
                        if played.boxes_completed > 0 {
                            println!("you completed {} box(es) - go again", played.boxes_completed);
                        }
                        println!("{}", engine.state());
                    }
                    Err(error) => println!("move error: {}", error),
                }
            } else {
                let line = match engine.best_move() {
                    Ok(line) => line,
                    Err(error) => {
                        println!("search error: {}", error);
                        break;
                    }
                };
                let stats = engine.search_stats();

                match engine.play_line(line) {
                    Ok(played) => {
                        println!("machine plays {}", line);
                        println!(
                            "* Evaluation: {}\n* Nodes searched: {}",
                            stats
                                .best_evaluation
                                .map_or("-".to_string(), |score| score.to_string()),
                            stats.nodes_visited
                        );
                        if played.boxes_completed > 0 {
                            println!(
                                "machine completed {} box(es) and goes again",
                                played.boxes_completed
                            );
                        }
                        println!("{}", engine.state());
                    }
                    Err(error) => {
                        println!("move error: {}", error);
                        break;
                    }
                }
            }
        }
    }
}
