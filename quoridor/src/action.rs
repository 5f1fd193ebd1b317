use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use regex::Regex;
use serde::de::{Deserialize, Deserializer, Error as DeserializeError, Unexpected, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::{Coordinate, Wall};

const WALL_NAME_PATTERN: &str =
    r"^\((\d+),(\d+)\)-\((\d+),(\d+)\)_\((\d+),(\d+)\)-\((\d+),(\d+)\)$";

/// An ordinary one-cell pawn step.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveDirection {
    Up,
    Right,
    Left,
    Down,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Up,
        MoveDirection::Right,
        MoveDirection::Left,
        MoveDirection::Down,
    ];

    pub fn delta(&self) -> (i8, i8) {
        match self {
            MoveDirection::Up => (-1, 0),
            MoveDirection::Right => (0, 1),
            MoveDirection::Left => (0, -1),
            MoveDirection::Down => (1, 0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoveDirection::Up => "up",
            MoveDirection::Right => "right",
            MoveDirection::Left => "left",
            MoveDirection::Down => "down",
        }
    }

    pub(crate) fn ordinal(&self) -> usize {
        Self::ALL.iter().position(|direction| direction == self).unwrap_or(0)
    }
}

/// A jump over the opponent, or a diagonal step around them when the straight
/// jump is blocked. Only offered while the opponent occupies the adjacent
/// cell in the move's primary direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SpecialMove {
    JumpUp,
    JumpDown,
    JumpLeft,
    JumpRight,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl SpecialMove {
    pub const ALL: [SpecialMove; 8] = [
        SpecialMove::JumpUp,
        SpecialMove::JumpDown,
        SpecialMove::JumpLeft,
        SpecialMove::JumpRight,
        SpecialMove::UpLeft,
        SpecialMove::UpRight,
        SpecialMove::DownLeft,
        SpecialMove::DownRight,
    ];

    pub fn delta(&self) -> (i8, i8) {
        match self {
            SpecialMove::JumpUp => (-2, 0),
            SpecialMove::JumpDown => (2, 0),
            SpecialMove::JumpLeft => (0, -2),
            SpecialMove::JumpRight => (0, 2),
            SpecialMove::UpLeft => (-1, -1),
            SpecialMove::UpRight => (-1, 1),
            SpecialMove::DownLeft => (1, -1),
            SpecialMove::DownRight => (1, 1),
        }
    }

    pub fn from_delta(delta: (i8, i8)) -> Option<SpecialMove> {
        Self::ALL.into_iter().find(|special| special.delta() == delta)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpecialMove::JumpUp => "jump_up",
            SpecialMove::JumpDown => "jump_down",
            SpecialMove::JumpLeft => "jump_left",
            SpecialMove::JumpRight => "jump_right",
            SpecialMove::UpLeft => "up_left",
            SpecialMove::UpRight => "up_right",
            SpecialMove::DownLeft => "down_left",
            SpecialMove::DownRight => "down_right",
        }
    }

    pub(crate) fn ordinal(&self) -> usize {
        Self::ALL.iter().position(|special| special == self).unwrap_or(0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Move(MoveDirection),
    SpecialMove(SpecialMove),
    PlaceWall(Wall),
}

impl Action {
    /// The pawn displacement for movement actions; `None` for walls.
    pub fn delta(&self) -> Option<(i8, i8)> {
        match self {
            Action::Move(direction) => Some(direction.delta()),
            Action::SpecialMove(special) => Some(special.delta()),
            Action::PlaceWall(_) => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Move(direction) => write!(f, "{}", direction.name()),
            Action::SpecialMove(special) => write!(f, "{}", special.name()),
            Action::PlaceWall(wall) => write!(f, "{}", wall),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(direction) = MoveDirection::ALL.into_iter().find(|d| d.name() == s) {
            return Ok(Action::Move(direction));
        }

        if let Some(special) = SpecialMove::ALL.into_iter().find(|m| m.name() == s) {
            return Ok(Action::SpecialMove(special));
        }

        let wall_name = Regex::new(WALL_NAME_PATTERN)?;
        let captures = wall_name
            .captures(s)
            .ok_or_else(|| anyhow!("invalid action: {}", s))?;

        let mut cells = [Coordinate::new(0, 0); 4];
        for (i, cell) in cells.iter_mut().enumerate() {
            let row: u8 = captures[i * 2 + 1].parse()?;
            let col: u8 = captures[i * 2 + 2].parse()?;
            *cell = Coordinate::new(row, col);
        }

        if !cells[0].is_adjacent(cells[1]) || !cells[2].is_adjacent(cells[3]) {
            bail!("invalid wall: {}", s);
        }

        Ok(Action::PlaceWall(Wall::new(
            (cells[0], cells[1]),
            (cells[2], cells[3]),
        )))
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct ActionVisitor;

impl Visitor<'_> for ActionVisitor {
    type Value = Action;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "a movement name such as 'up' or 'jump_left', or a wall name such as \
             '(0,0)-(1,0)_(0,1)-(1,1)'",
        )
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: DeserializeError,
    {
        v.parse::<Action>()
            .map_err(|_| DeserializeError::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ActionVisitor)
    }
}
