//! Simulation constants.

use crate::simulation::tile::Position;

/// Move ceiling used when the configuration does not set one.
pub const DEFAULT_MAX_MOVES: usize = 100;
/// Number of recent turns kept for the dashboard log.
pub const HISTORY_SIZE: usize = 32;
/// Default delay between auto-played turns in the dashboard.
pub const DEFAULT_TICK_MS: u64 = 200;
/// Board used when none is configured.
pub const DEFAULT_BOARD: &str = "labyrinth";

/// Stand-in position for the switch action when ranking candidates.
///
/// Far enough away that toggling is always ranked after any real step.
pub const SWITCH_SENTINEL: Position = Position::new(1000, 1000);

/// Marker drawn on top of the actor's tile.
pub const ACTOR_GLYPH: char = '@';
/// Glyph for tiles the explorer has not observed yet.
pub const UNKNOWN_GLYPH: char = ' ';
