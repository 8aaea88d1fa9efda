use crate::simulation::memory::PartialMap;
use crate::simulation::params::{ACTOR_GLYPH, UNKNOWN_GLYPH};
use crate::simulation::tile::{Position, TileKind};
use rayon::prelude::*;

/// Glyph used on the dashboard for a known tile.
///
/// Empty floor is drawn as `.` so that it stays distinct from unexplored cells.
#[must_use]
pub const fn display_glyph(kind: TileKind) -> char {
    match kind {
        TileKind::Empty => '.',
        other => other.glyph(),
    }
}

/// Renders a row-major grid of optional tiles into text rows.
///
/// Unknown cells are blank and the actor, when inside the grid, is drawn on
/// top of its tile.
#[must_use]
pub fn compute_map_rows(
    cells: &[Option<TileKind>],
    rows: usize,
    cols: usize,
    actor: Option<Position>,
) -> Vec<String> {
    if rows == 0 || cols == 0 || cells.len() < rows * cols {
        return Vec::new();
    }

    let actor_cell = actor.and_then(|p| {
        let r = usize::try_from(p.row).ok()?;
        let c = usize::try_from(p.col).ok()?;
        (r < rows && c < cols).then_some((r, c))
    });

    // Use rayon to compute rows in parallel
    (0..rows)
        .into_par_iter()
        .map(|r| {
            let mut line = String::with_capacity(cols);
            for c in 0..cols {
                if actor_cell == Some((r, c)) {
                    line.push(ACTOR_GLYPH);
                    continue;
                }
                let glyph = cells[r * cols + c].map_or(UNKNOWN_GLYPH, display_glyph);
                line.push(glyph);
            }
            line
        })
        .collect()
}

/// Renders the explorer's partial map with the actor marked.
#[must_use]
pub fn compute_partial_rows(map: &PartialMap, actor: Position) -> Vec<String> {
    let (rows, cols) = map.dimensions();
    compute_map_rows(map.cells(), rows, cols, Some(actor))
}

/// Renders fully known tiles (the ground truth) with the actor marked.
#[must_use]
pub fn compute_board_rows(
    tiles: &[TileKind],
    rows: usize,
    cols: usize,
    actor: Position,
) -> Vec<String> {
    let known: Vec<Option<TileKind>> = tiles.iter().copied().map(Some).collect();
    compute_map_rows(&known, rows, cols, Some(actor))
}
