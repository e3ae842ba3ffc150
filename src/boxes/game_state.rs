//! Board representation and rules for dots-and-boxes.

use std::fmt;

use thiserror::Error;

/// The two sides of a game. `Machine` is the maximizing side wherever a
/// search is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Machine,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One line on the board. Horizontal lines occupy rows `0..=size` and
/// columns `0..size`; vertical lines occupy rows `0..size` and columns
/// `0..=size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl Line {
    pub fn horizontal(row: usize, col: usize) -> Self {
        Line {
            orientation: Orientation::Horizontal,
            row,
            col,
        }
    }

    pub fn vertical(row: usize, col: usize) -> Self {
        Line {
            orientation: Orientation::Vertical,
            row,
            col,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        };
        write!(f, "{} {} {}", tag, self.row, self.col)
    }
}

/// Outcome of applying a line. `mover` is the side that drew it -- the side
/// considered to have moved into the resulting position -- reported
/// explicitly rather than left to be inferred from turn parity, because
/// completing a box keeps the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Played {
    pub mover: Player,
    pub boxes_completed: u32,
    pub next_to_move: Player,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("line out of bounds: {0}")]
    OutOfBounds(Line),
    #[error("line already drawn: {0}")]
    AlreadyDrawn(Line),
}

/// Full game state for a `size x size` grid of boxes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    size: usize,
    horizontal: Vec<bool>,
    vertical: Vec<bool>,
    owners: Vec<Option<Player>>,
    human_score: i32,
    machine_score: i32,
    to_move: Player,
}

impl GameState {
    /// An empty board. The human draws first, matching the classic setup;
    /// use [`GameState::set_to_move`] to change that.
    pub fn new(size: usize) -> Self {
        GameState {
            size,
            horizontal: vec![false; (size + 1) * size],
            vertical: vec![false; size * (size + 1)],
            owners: vec![None; size * size],
            human_score: 0,
            machine_score: 0,
            to_move: Player::Human,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn set_to_move(&mut self, player: Player) {
        self.to_move = player;
    }

    pub fn human_score(&self) -> i32 {
        self.human_score
    }

    pub fn machine_score(&self) -> i32 {
        self.machine_score
    }

    pub fn is_over(&self) -> bool {
        (self.human_score + self.machine_score) as usize == self.size * self.size
    }

    pub fn owner(&self, row: usize, col: usize) -> Option<Player> {
        self.owners[row * self.size + col]
    }

    pub fn line_drawn(&self, line: Line) -> bool {
        match line.orientation {
            Orientation::Horizontal => self.horizontal[line.row * self.size + line.col],
            Orientation::Vertical => self.vertical[line.row * (self.size + 1) + line.col],
        }
    }

    /// Number of sides already drawn around the box at `(row, col)`.
    pub fn sides_drawn(&self, row: usize, col: usize) -> u32 {
        let mut sides = 0;
        if self.horizontal[row * self.size + col] {
            sides += 1;
        }
        if self.horizontal[(row + 1) * self.size + col] {
            sides += 1;
        }
        if self.vertical[row * (self.size + 1) + col] {
            sides += 1;
        }
        if self.vertical[row * (self.size + 1) + col + 1] {
            sides += 1;
        }
        sides
    }

    /// Every undrawn line, horizontals first, in row-major order.
    pub fn valid_moves(&self) -> Vec<Line> {
        let mut moves = Vec::new();
        for row in 0..=self.size {
            for col in 0..self.size {
                if !self.horizontal[row * self.size + col] {
                    moves.push(Line::horizontal(row, col));
                }
            }
        }
        for row in 0..self.size {
            for col in 0..=self.size {
                if !self.vertical[row * (self.size + 1) + col] {
                    moves.push(Line::vertical(row, col));
                }
            }
        }
        moves
    }

    /// Draws a line for the side to move. Completing one or two boxes
    /// scores them for the mover and keeps the turn; otherwise the turn
    /// passes to the opponent.
    pub fn apply(&mut self, line: Line) -> Result<Played, MoveError> {
        if !self.in_bounds(line) {
            return Err(MoveError::OutOfBounds(line));
        }
        if self.line_drawn(line) {
            return Err(MoveError::AlreadyDrawn(line));
        }

        let mover = self.to_move;
        match line.orientation {
            Orientation::Horizontal => self.horizontal[line.row * self.size + line.col] = true,
            Orientation::Vertical => self.vertical[line.row * (self.size + 1) + line.col] = true,
        }

        let boxes_completed = self.claim_completed_boxes(line, mover);
        if boxes_completed > 0 {
            match mover {
                Player::Human => self.human_score += boxes_completed as i32,
                Player::Machine => self.machine_score += boxes_completed as i32,
            }
        } else {
            self.to_move = mover.opponent();
        }

        Ok(Played {
            mover,
            boxes_completed,
            next_to_move: self.to_move,
        })
    }

    fn in_bounds(&self, line: Line) -> bool {
        match line.orientation {
            Orientation::Horizontal => line.row <= self.size && line.col < self.size,
            Orientation::Vertical => line.row < self.size && line.col <= self.size,
        }
    }

    /// Checks the one or two boxes adjacent to a freshly drawn line and
    /// claims any that are now closed.
    fn claim_completed_boxes(&mut self, line: Line, mover: Player) -> u32 {
        let mut completed = 0;
        match line.orientation {
            Orientation::Horizontal => {
                if line.row < self.size && self.try_claim(line.row, line.col, mover) {
                    completed += 1;
                }
                if line.row > 0 && self.try_claim(line.row - 1, line.col, mover) {
                    completed += 1;
                }
            }
            Orientation::Vertical => {
                if line.col < self.size && self.try_claim(line.row, line.col, mover) {
                    completed += 1;
                }
                if line.col > 0 && self.try_claim(line.row, line.col - 1, mover) {
                    completed += 1;
                }
            }
        }
        completed
    }

    fn try_claim(&mut self, row: usize, col: usize, mover: Player) -> bool {
        if self.owners[row * self.size + col].is_some() {
            return false;
        }
        if self.sides_drawn(row, col) == 4 {
            self.owners[row * self.size + col] = Some(mover);
            return true;
        }
        false
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..=self.size {
            for col in 0..self.size {
                let drawn = self.horizontal[row * self.size + col];
                write!(f, "+{}", if drawn { "---" } else { "   " })?;
            }
            writeln!(f, "+")?;

            if row < self.size {
                for col in 0..=self.size {
                    let drawn = self.vertical[row * (self.size + 1) + col];
                    write!(f, "{}", if drawn { "|" } else { " " })?;
                    if col < self.size {
                        let mark = match self.owner(row, col) {
                            Some(Player::Human) => " H ",
                            Some(Player::Machine) => " M ",
                            None => "   ",
                        };
                        write!(f, "{}", mark)?;
                    }
                }
                writeln!(f)?;
            }
        }
        write!(
            f,
            "you {} - {} machine, {} to move",
            self.human_score,
            self.machine_score,
            match self.to_move {
                Player::Human => "you",
                Player::Machine => "machine",
            }
        )
    }
}
