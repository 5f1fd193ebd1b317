use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};

/// A board cell. `row` 0 is the top row; `col` 0 is the leftmost column.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: u8,
    pub col: u8,
}

impl Coordinate {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The cell's index in row-major 0..N²−1 order.
    pub fn index(&self, board_size: u8) -> usize {
        self.row as usize * board_size as usize + self.col as usize
    }

    pub fn from_index(index: usize, board_size: u8) -> Self {
        let size = board_size as usize;
        assert!(
            index < size * size,
            "coordinate index {} out of range for a {}x{} board",
            index,
            board_size,
            board_size
        );

        Self {
            row: (index / size) as u8,
            col: (index % size) as u8,
        }
    }

    /// Translates by `(dy, dx)`, returning `None` when the result leaves the
    /// board.
    pub fn offset(&self, (dy, dx): (i8, i8), board_size: u8) -> Option<Coordinate> {
        let row = self.row as i16 + dy as i16;
        let col = self.col as i16 + dx as i16;
        let bounds = 0..board_size as i16;

        if bounds.contains(&row) && bounds.contains(&col) {
            Some(Coordinate::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// True when `other` is an orthogonal neighbor at distance one.
    pub fn is_adjacent(&self, other: Coordinate) -> bool {
        let dy = (self.row as i16 - other.row as i16).abs();
        let dx = (self.col as i16 - other.col as i16).abs();
        dy + dx == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Coordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| anyhow!("invalid coordinate: {}", s))?;
        let (row, col) = inner
            .split_once(',')
            .ok_or_else(|| anyhow!("invalid coordinate: {}", s))?;

        Ok(Coordinate::new(row.trim().parse()?, col.trim().parse()?))
    }
}
