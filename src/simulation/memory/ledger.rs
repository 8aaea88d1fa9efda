//! Visitation ledger: which passability modes each tile was stood on under.

use crate::simulation::tile::{PassMode, Position};

/// Set of passability modes, stored as two bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeSet(u8);

impl ModeSet {
    const fn bit(mode: PassMode) -> u8 {
        match mode {
            PassMode::Red => 0b01,
            PassMode::Green => 0b10,
        }
    }

    #[must_use]
    pub const fn contains(self, mode: PassMode) -> bool {
        self.0 & Self::bit(mode) != 0
    }

    pub fn insert(&mut self, mode: PassMode) {
        self.0 |= Self::bit(mode);
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Labels of the contained modes, red first (e.g. `"rg"`).
    #[must_use]
    pub fn labels(self) -> String {
        PassMode::all()
            .into_iter()
            .filter(|m| self.contains(*m))
            .map(PassMode::label)
            .collect()
    }
}

/// Per-tile record of the modes under which the actor stood there.
///
/// Entries only ever grow; there is no way to forget a visit.
#[derive(Clone, Debug)]
pub struct VisitLedger {
    cells: Vec<ModeSet>,
    rows: usize,
    cols: usize,
}

impl VisitLedger {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![ModeSet::default(); rows * cols],
            rows,
            cols,
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// Adds `mode` to the set at `pos`. Repeated calls have no further effect.
    pub fn mark_visited(&mut self, pos: Position, mode: PassMode) {
        if let Some(i) = self.index(pos) {
            self.cells[i].insert(mode);
        }
    }

    /// True if `pos` has not been visited under `mode`.
    ///
    /// Positions outside the grid are never frontier.
    #[must_use]
    pub fn is_frontier(&self, pos: Position, mode: PassMode) -> bool {
        self.index(pos)
            .is_some_and(|i| !self.cells[i].contains(mode))
    }

    #[must_use]
    pub fn visited_modes(&self, pos: Position) -> ModeSet {
        self.index(pos).map_or_else(ModeSet::default, |i| self.cells[i])
    }

    /// Total number of (tile, mode) pairs recorded.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.cells.iter().map(|s| s.len() as usize).sum()
    }

    /// Returns (rows, cols).
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Mode sets in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[ModeSet] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ledger_is_all_frontier() {
        let ledger = VisitLedger::new(3, 3);
        for mode in PassMode::all() {
            assert!(ledger.is_frontier(Position::new(1, 1), mode));
        }
        assert_eq!(ledger.visited_count(), 0);
    }

    #[test]
    fn test_mark_is_per_mode() {
        let mut ledger = VisitLedger::new(3, 3);
        let pos = Position::new(1, 1);
        ledger.mark_visited(pos, PassMode::Red);
        assert!(!ledger.is_frontier(pos, PassMode::Red));
        assert!(ledger.is_frontier(pos, PassMode::Green));
        assert_eq!(ledger.visited_modes(pos).labels(), "r");

        ledger.mark_visited(pos, PassMode::Green);
        assert_eq!(ledger.visited_modes(pos).labels(), "rg");
        assert_eq!(ledger.visited_count(), 2);
    }

    #[test]
    fn test_out_of_bounds_is_not_frontier() {
        let ledger = VisitLedger::new(3, 3);
        assert!(!ledger.is_frontier(Position::new(-1, 1), PassMode::Red));
        assert!(!ledger.is_frontier(Position::new(1, 3), PassMode::Red));
    }

    #[test]
    fn test_mode_set_basics() {
        let mut set = ModeSet::default();
        assert!(set.is_empty());
        set.insert(PassMode::Green);
        set.insert(PassMode::Green);
        assert_eq!(set.len(), 1);
        assert!(set.contains(PassMode::Green));
        assert!(!set.contains(PassMode::Red));
    }
}
