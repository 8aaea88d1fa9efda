//! The move vocabulary shared by the world model and the explorer.

use std::fmt;
use std::str::FromStr;

use crate::simulation::error::MazeError;
use crate::simulation::tile::Direction;

/// A single action the actor can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
    /// Flip the global passability mode (only on a switch tile)
    Switch,
    /// Leave the maze (only on the exit tile)
    Finish,
}

impl Move {
    /// Returns all moves in canonical order.
    ///
    /// This order is also the tie-break order when ranking candidates.
    #[must_use]
    pub const fn all() -> [Move; 6] {
        [
            Move::Up,
            Move::Down,
            Move::Left,
            Move::Right,
            Move::Switch,
            Move::Finish,
        ]
    }

    /// Position of this move in [`Move::all`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
            Self::Switch => 4,
            Self::Finish => 5,
        }
    }

    /// The step direction, if this move changes position.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Switch | Self::Finish => None,
        }
    }

    /// The move that undoes this one. `Finish` cannot be undone.
    #[must_use]
    pub const fn inverse(self) -> Option<Self> {
        match self {
            Self::Up => Some(Self::Down),
            Self::Down => Some(Self::Up),
            Self::Left => Some(Self::Right),
            Self::Right => Some(Self::Left),
            Self::Switch => Some(Self::Switch),
            Self::Finish => None,
        }
    }

    /// Whether the move can be recorded for backtracking.
    #[must_use]
    pub const fn is_reversible(self) -> bool {
        !matches!(self, Self::Finish)
    }

    /// Command string understood by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "move up",
            Self::Down => "move down",
            Self::Left => "move left",
            Self::Right => "move right",
            Self::Switch => "switch",
            Self::Finish => "finish",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let name = normalized.strip_prefix("move ").unwrap_or(&normalized);
        match name {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "switch" => Ok(Self::Switch),
            "finish" => Ok(Self::Finish),
            _ => Err(MazeError::UnknownMove(s.to_string())),
        }
    }
}
