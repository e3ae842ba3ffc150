//! The 3x3 sliding-tile board.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use smallvec::SmallVec;
use thiserror::Error;

/// Board width; 3 gives the classic 8-puzzle.
pub const WIDTH: usize = 3;
const CELLS: usize = WIDTH * WIDTH;

/// A tile arrangement, row-major. `0` is the blank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Tiles([u8; CELLS]);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseTilesError {
    #[error("expected 9 comma-separated tiles, got {0}")]
    WrongCount(usize),
    #[error("invalid tile number: {0:?}")]
    BadNumber(String),
    #[error("tiles must be a permutation of 0..=8; {0} appears twice")]
    Duplicate(u8),
}

impl Tiles {
    /// The solved arrangement: 1 through 8 with the blank last.
    pub fn goal() -> Self {
        Tiles([1, 2, 3, 4, 5, 6, 7, 8, 0])
    }

    pub fn from_cells(cells: [u8; CELLS]) -> Result<Self, ParseTilesError> {
        let mut seen = [false; CELLS];
        for &cell in cells.iter() {
            if cell as usize >= CELLS {
                return Err(ParseTilesError::BadNumber(cell.to_string()));
            }
            if seen[cell as usize] {
                return Err(ParseTilesError::Duplicate(cell));
            }
            seen[cell as usize] = true;
        }
        Ok(Tiles(cells))
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row * WIDTH + col]
    }

    /// Position of the blank.
    pub fn blank(&self) -> (usize, usize) {
        let index = self
            .0
            .iter()
            .position(|&cell| cell == 0)
            .expect("a valid arrangement always has a blank");
        (index / WIDTH, index % WIDTH)
    }

    /// The squares the blank can move to: up, down, left, right, bounds
    /// permitting.
    pub fn legal_blank_moves(&self) -> SmallVec<[(usize, usize); 4]> {
        let (row, col) = self.blank();
        let mut moves = SmallVec::new();
        if row > 0 {
            moves.push((row - 1, col));
        }
        if row + 1 < WIDTH {
            moves.push((row + 1, col));
        }
        if col > 0 {
            moves.push((row, col - 1));
        }
        if col + 1 < WIDTH {
            moves.push((row, col + 1));
        }
        moves
    }

    /// The arrangement after sliding the tile at `target` into the blank.
    pub fn moved(&self, target: (usize, usize)) -> Tiles {
        let (blank_row, blank_col) = self.blank();
        let mut cells = self.0;
        cells[blank_row * WIDTH + blank_col] = cells[target.0 * WIDTH + target.1];
        cells[target.0 * WIDTH + target.1] = 0;
        Tiles(cells)
    }

    /// Sum of per-tile Manhattan distances to each tile's goal square,
    /// blank excluded. Never overestimates the true solve distance.
    pub fn manhattan_to_goal(&self) -> u32 {
        let mut distance = 0;
        for index in 0..CELLS {
            let value = self.0[index] as usize;
            if value == 0 {
                continue;
            }
            let (row, col) = (index / WIDTH, index % WIDTH);
            let (goal_row, goal_col) = ((value - 1) / WIDTH, (value - 1) % WIDTH);
            distance += (row as i32 - goal_row as i32).abs() + (col as i32 - goal_col as i32).abs();
        }
        distance as u32
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::goal()
    }

    /// Inversion-parity test: with an odd board width, an arrangement is
    /// reachable from the goal exactly when its non-blank sequence has an
    /// even number of inversions.
    pub fn is_solvable(&self) -> bool {
        let sequence: Vec<u8> = self.0.iter().copied().filter(|&cell| cell != 0).collect();
        let mut inversions = 0;
        for i in 0..sequence.len() {
            for j in i + 1..sequence.len() {
                if sequence[i] > sequence[j] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }

    /// A random walk of `steps` blank moves away from the goal, never
    /// undoing the move just made. Always solvable.
    pub fn scrambled<R: Rng>(rng: &mut R, steps: usize) -> Tiles {
        let mut tiles = Self::goal();
        let mut previous_blank: Option<(usize, usize)> = None;
        for _ in 0..steps {
            let moves: SmallVec<[(usize, usize); 4]> = tiles
                .legal_blank_moves()
                .into_iter()
                .filter(|&target| Some(target) != previous_blank)
                .collect();
            let target = moves[rng.gen_range(0..moves.len())];
            previous_blank = Some(tiles.blank());
            tiles = tiles.moved(target);
        }
        tiles
    }
}

impl FromStr for Tiles {
    type Err = ParseTilesError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = input.split(',').map(str::trim).collect();
        if fields.len() != CELLS {
            return Err(ParseTilesError::WrongCount(fields.len()));
        }
        let mut cells = [0u8; CELLS];
        for (slot, field) in cells.iter_mut().zip(fields.iter()) {
            *slot = field
                .parse()
                .map_err(|_| ParseTilesError::BadNumber(field.to_string()))?;
        }
        Self::from_cells(cells)
    }
}

impl fmt::Display for Tiles {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..WIDTH {
            for col in 0..WIDTH {
                let cell = self.get(row, col);
                if cell == 0 {
                    write!(f, " .")?;
                } else {
                    write!(f, " {}", cell)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
