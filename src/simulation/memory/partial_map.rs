//! The explorer's private reconstruction of the maze.
//!
//! Starts out knowing only the outer wall, the start and the exit, and
//! fills in from percepts. Knowledge is never removed.

use crate::simulation::tile::{Position, TileKind};
use tracing::debug;

/// A grid of tile kinds where `None` means "not observed yet".
#[derive(Clone, Debug)]
pub struct PartialMap {
    cells: Vec<Option<TileKind>>,
    rows: usize,
    cols: usize,
    conflicts: u32,
}

impl PartialMap {
    /// Creates a map of the given size with a known wall border.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = vec![None; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                if r == 0 || c == 0 || r + 1 == rows || c + 1 == cols {
                    cells[r * cols + c] = Some(TileKind::Wall);
                }
            }
        }
        Self {
            cells,
            rows,
            cols,
            conflicts: 0,
        }
    }

    /// Creates a bordered map with the start and exit already placed.
    #[must_use]
    pub fn with_landmarks(rows: usize, cols: usize, start: Position, exit: Position) -> Self {
        let mut map = Self::new(rows, cols);
        if let Some(i) = map.index(start) {
            map.cells[i] = Some(TileKind::Start);
        }
        if let Some(i) = map.index(exit) {
            map.cells[i] = Some(TileKind::Exit);
        }
        map
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// Records that `kind` was seen at `pos`.
    ///
    /// Only unknown cells are written; a percept that disagrees with what is
    /// already known is counted and dropped. Returns true if the map changed.
    pub fn observe(&mut self, pos: Position, kind: TileKind) -> bool {
        let Some(i) = self.index(pos) else {
            return false;
        };
        match self.cells[i] {
            None => {
                self.cells[i] = Some(kind);
                true
            }
            Some(known) if known != kind => {
                self.conflicts = self.conflicts.saturating_add(1);
                debug!(%pos, ?known, observed = ?kind, "ignoring conflicting percept");
                false
            }
            Some(_) => false,
        }
    }

    /// Known kind at `pos`, or `None` if unobserved or out of bounds.
    #[must_use]
    pub fn kind_at(&self, pos: Position) -> Option<TileKind> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    /// Returns (rows, cols).
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of cells with a known kind.
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of percepts dropped because they contradicted the map.
    #[must_use]
    pub const fn conflicts(&self) -> u32 {
        self.conflicts
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Option<TileKind>] {
        &self.cells
    }
}
