//! Grid primitives shared by the world model and the explorer's memory.

use std::fmt;

/// A tile coordinate as (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring position one step in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.offset();
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Manhattan distance between two positions.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four compass directions an actor can step in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row/column delta of a single step.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Global passability toggle. Conditional tiles open only under their own mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PassMode {
    #[default]
    Red,
    Green,
}

impl PassMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Red,
        }
    }

    /// Board-text label of the mode (`r` or `g`).
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Green => 'g',
        }
    }

    /// Both modes, red first.
    #[must_use]
    pub const fn all() -> [PassMode; 2] {
        [PassMode::Red, PassMode::Green]
    }
}

impl fmt::Display for PassMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("red"),
            Self::Green => f.write_str("green"),
        }
    }
}

/// What occupies a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    Empty,
    Start,
    Exit,
    Switch,
    /// Passable only while the world is in the given mode.
    Conditional(PassMode),
}

impl TileKind {
    /// Parses a board-text character.
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'W' => Some(Self::Wall),
            ' ' => Some(Self::Empty),
            'B' => Some(Self::Start),
            'E' => Some(Self::Exit),
            'S' => Some(Self::Switch),
            'r' => Some(Self::Conditional(PassMode::Red)),
            'g' => Some(Self::Conditional(PassMode::Green)),
            _ => None,
        }
    }

    /// Board-text character of the tile.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => 'W',
            Self::Empty => ' ',
            Self::Start => 'B',
            Self::Exit => 'E',
            Self::Switch => 'S',
            Self::Conditional(mode) => mode.label(),
        }
    }

    /// Whether an actor may enter this tile while `mode` is active.
    #[must_use]
    pub fn is_passable(self, mode: PassMode) -> bool {
        match self {
            Self::Wall => false,
            Self::Empty | Self::Start | Self::Exit | Self::Switch => true,
            Self::Conditional(label) => label == mode,
        }
    }
}

/// Tile kinds of the four cells around a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    pub left: TileKind,
    pub up: TileKind,
    pub right: TileKind,
    pub down: TileKind,
}

impl Neighborhood {
    /// Returns the kind seen in `direction`.
    #[must_use]
    pub const fn get(&self, direction: Direction) -> TileKind {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Iterates (direction, kind) pairs in left, up, right, down order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, TileKind)> + '_ {
        [Direction::Left, Direction::Up, Direction::Right, Direction::Down]
            .into_iter()
            .map(move |d| (d, self.get(d)))
    }
}
