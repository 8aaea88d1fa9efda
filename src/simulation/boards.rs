//! Bundled mazes, addressable by name from the configuration.

use crate::simulation::environment::Board;
use crate::simulation::error::MazeError;

/// 7×5 maze: the exit is only reachable after using the switch.
pub const SWITCHBACK: [&str; 7] = [
    "WWWWW",
    "W  EW",
    "WgWWW",
    "W  SW",
    "WWrWW",
    "WB  W",
    "WWWWW",
];

/// 7×10 maze with three switches and both kinds of conditional tiles.
pub const LABYRINTH: [&str; 7] = [
    "WWWWWWWWWW",
    "W    g  SW",
    "WW W WW WW",
    "W gWSrWrWW",
    "WW WW W EW",
    "WB  S W WW",
    "WWWWWWWWWW",
];

/// Names accepted by [`load`].
pub const NAMES: [&str; 2] = ["switchback", "labyrinth"];

/// Builds a fresh copy of the named bundled board.
///
/// # Errors
/// Returns `MazeError::UnknownBoard` for names not in [`NAMES`].
pub fn load(name: &str) -> Result<Board, MazeError> {
    match name {
        "switchback" => Board::parse(&SWITCHBACK),
        "labyrinth" => Board::parse(&LABYRINTH),
        other => Err(MazeError::UnknownBoard(other.to_string())),
    }
}
