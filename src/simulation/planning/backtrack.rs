//! Explicit stack of search decisions, used to undo dead ends in order.

use crate::simulation::planning::Move;

/// One forward step of the search and the siblings still to try.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Move that was taken at this depth
    pub taken: Move,
    /// Untried alternatives at the same depth, in preference order
    pub alternatives: Vec<Move>,
}

impl Frame {
    #[must_use]
    pub fn new(taken: Move, alternatives: Vec<Move>) -> Self {
        Self {
            taken,
            alternatives,
        }
    }
}

/// LIFO record of forward steps that have not been undone yet.
#[derive(Clone, Debug, Default)]
pub struct BacktrackRecord {
    frames: Vec<Frame>,
    max_depth: usize,
}

impl BacktrackRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a frame. `Finish` is never recorded.
    pub fn push(&mut self, frame: Frame) {
        debug_assert!(frame.taken.is_reversible(), "finish pushed onto backtrack record");
        self.frames.push(frame);
        self.max_depth = self.max_depth.max(self.frames.len());
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    #[must_use]
    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Move that undoes the most recent forward step.
    #[must_use]
    pub fn undo_move(&self) -> Option<Move> {
        self.top().and_then(|f| f.taken.inverse())
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Deepest the record has been.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Frames from the bottom of the stack to the top.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Taken moves from the bottom of the stack, i.e. the current path.
    pub fn path(&self) -> impl Iterator<Item = Move> + '_ {
        self.frames.iter().map(|f| f.taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut record = BacktrackRecord::new();
        record.push(Frame::new(Move::Right, vec![]));
        record.push(Frame::new(Move::Up, vec![Move::Left]));

        assert_eq!(record.depth(), 2);
        assert_eq!(record.undo_move(), Some(Move::Down));
        assert_eq!(record.pop().map(|f| f.taken), Some(Move::Up));
        assert_eq!(record.undo_move(), Some(Move::Left));
        assert_eq!(record.pop().map(|f| f.taken), Some(Move::Right));
        assert!(record.is_empty());
        assert!(record.pop().is_none());
    }

    #[test]
    fn test_max_depth_survives_pops() {
        let mut record = BacktrackRecord::new();
        for _ in 0..3 {
            record.push(Frame::new(Move::Down, vec![]));
        }
        record.pop();
        record.pop();
        assert_eq!(record.depth(), 1);
        assert_eq!(record.max_depth(), 3);
    }

    #[test]
    fn test_path_lists_taken_moves() {
        let mut record = BacktrackRecord::new();
        record.push(Frame::new(Move::Right, vec![Move::Up]));
        record.push(Frame::new(Move::Switch, vec![]));
        let path: Vec<_> = record.path().collect();
        assert_eq!(path, vec![Move::Right, Move::Switch]);
        assert_eq!(record.undo_move(), Some(Move::Switch));
    }
}
