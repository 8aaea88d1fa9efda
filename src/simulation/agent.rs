use crate::simulation::environment::WorldView;
use crate::simulation::error::MazeError;
use crate::simulation::memory::{PartialMap, VisitLedger};
use crate::simulation::planning::{BacktrackRecord, CandidateScore, Frame, Move, choose_move};
use crate::simulation::tile::{Neighborhood, PassMode, Position};
use tracing::{debug, warn};

/// Whether the search is pushing into new territory or unwinding a dead end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AgentMode {
    #[default]
    Forward,
    Backtrack,
}

/// Counters describing how a run unfolded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExplorerStats {
    /// Moves that pushed a new frame
    pub forward_steps: u32,
    /// Moves that undid an earlier step
    pub reverse_steps: u32,
    /// Frames popped that still had an alternative to try
    pub branch_resumes: u32,
    /// Alternatives discarded because they had been reached another way
    pub stale_alternatives: u32,
}

/// Depth-first maze explorer working from local percepts only.
///
/// The explorer keeps its own copy of everything it knows: a partial map,
/// a ledger of (tile, mode) visits and the stack of decisions to undo. The
/// actor position and passability mode are mirrored from move outcomes.
#[derive(Clone, Debug)]
pub struct Explorer {
    map: PartialMap,
    ledger: VisitLedger,
    record: BacktrackRecord,
    mode: AgentMode,
    position: Position,
    pass_mode: PassMode,
    exit: Position,
    finished: bool,
    /// The last undo was refused, so the top frame still has to be undone
    undo_rejected: bool,
    stats: ExplorerStats,
    last_scores: Vec<CandidateScore>,
}

impl Explorer {
    /// Binds a new explorer to `world`.
    ///
    /// Copies the dimensions, start, exit, mode and the first percept; no
    /// reference to the world is kept.
    #[must_use]
    pub fn new(world: &impl WorldView) -> Self {
        let (rows, cols) = world.dimensions();
        let start = world.start_position();
        let exit = world.exit_position();
        let position = world.actor_position();

        let mut explorer = Self {
            map: PartialMap::with_landmarks(rows, cols, start, exit),
            ledger: VisitLedger::new(rows, cols),
            record: BacktrackRecord::new(),
            mode: AgentMode::Forward,
            position,
            pass_mode: world.current_mode(),
            exit,
            finished: false,
            undo_rejected: false,
            stats: ExplorerStats::default(),
            last_scores: Vec::new(),
        };
        explorer.on_observation(&world.neighbor_kinds(position));
        explorer
    }

    /// Chooses the next move from the currently legal ones.
    ///
    /// # Errors
    /// `MazeError::GoalUnreachable` once the search space is exhausted, and
    /// `MazeError::MoveAfterFinish` if called after a successful finish.
    pub fn decide(&mut self, legal: &[Move]) -> Result<Move, MazeError> {
        if self.finished {
            return Err(MazeError::MoveAfterFinish);
        }
        if legal.contains(&Move::Finish) {
            return Ok(Move::Finish);
        }

        match self.mode {
            AgentMode::Forward => self.advance(legal),
            AgentMode::Backtrack => self.unwind(),
        }
    }

    fn advance(&mut self, legal: &[Move]) -> Result<Move, MazeError> {
        let frontier: Vec<Move> = legal
            .iter()
            .copied()
            .filter(|m| self.reaches_new_state(*m))
            .collect();

        let Some((chosen, alternatives, scores)) = choose_move(&frontier, self.position, self.exit)
        else {
            self.mode = AgentMode::Backtrack;
            self.last_scores.clear();
            debug!(pos = %self.position, depth = self.record.depth(), "dead end, backtracking");
            let undo = self.record.undo_move().ok_or(MazeError::GoalUnreachable)?;
            self.stats.reverse_steps += 1;
            return Ok(undo);
        };

        self.last_scores = scores;
        self.record.push(Frame::new(chosen, alternatives));
        self.stats.forward_steps += 1;
        Ok(chosen)
    }

    fn unwind(&mut self) -> Result<Move, MazeError> {
        if self.undo_rejected {
            self.undo_rejected = false;
            let undo = self.record.undo_move().ok_or(MazeError::GoalUnreachable)?;
            self.stats.reverse_steps += 1;
            return Ok(undo);
        }

        let frame = self.record.pop().ok_or(MazeError::GoalUnreachable)?;

        // The siblings were legal here when recorded and the state is
        // restored, but some may have been reached through another branch.
        let before = frame.alternatives.len();
        let mut alternatives: Vec<Move> = frame
            .alternatives
            .into_iter()
            .filter(|m| self.reaches_new_state(*m))
            .collect();
        self.stats.stale_alternatives += u32::try_from(before - alternatives.len()).unwrap_or(0);

        if alternatives.is_empty() {
            let undo = self.record.undo_move().ok_or(MazeError::GoalUnreachable)?;
            self.stats.reverse_steps += 1;
            return Ok(undo);
        }

        let next = alternatives.remove(0);
        debug!(pos = %self.position, resume = %next, "resuming sibling branch");
        self.mode = AgentMode::Forward;
        self.last_scores.clear();
        self.record.push(Frame::new(next, alternatives));
        self.stats.branch_resumes += 1;
        self.stats.forward_steps += 1;
        Ok(next)
    }

    /// Whether `mv` leads to a (position, mode) state not yet in the ledger.
    ///
    /// Steps keep the mode; the switch keeps the position and flips the mode.
    #[must_use]
    pub fn reaches_new_state(&self, mv: Move) -> bool {
        match mv {
            Move::Switch => self.ledger.is_frontier(self.position, self.pass_mode.toggled()),
            Move::Finish => false,
            _ => self.ledger.is_frontier(self.position_after_move(mv), self.pass_mode),
        }
    }

    fn position_after_move(&self, mv: Move) -> Position {
        mv.direction()
            .map_or(self.position, |direction| self.position.step(direction))
    }

    /// Integrates the result of the last move.
    ///
    /// Every step or switch attempt marks the pre-move tile as visited under
    /// the pre-move mode, whether or not the world accepted it.
    ///
    /// # Errors
    /// `MazeError::MoveAfterFinish` if a move is reported after a finish.
    pub fn on_move_outcome(&mut self, mv: Move, succeeded: bool) -> Result<(), MazeError> {
        if self.finished {
            return Err(MazeError::MoveAfterFinish);
        }
        if mv == Move::Finish {
            self.finished = succeeded;
            return Ok(());
        }

        self.ledger.mark_visited(self.position, self.pass_mode);

        if !succeeded {
            warn!(%mv, pos = %self.position, "move rejected by world");
            match self.mode {
                AgentMode::Forward => {
                    if self.record.top().is_some_and(|f| f.taken == mv) {
                        self.record.pop();
                    }
                }
                AgentMode::Backtrack => self.undo_rejected = true,
            }
            return Ok(());
        }

        match mv {
            Move::Switch => {
                self.pass_mode = self.pass_mode.toggled();
                debug!(mode = %self.pass_mode, "passability toggled");
            }
            _ => self.position = self.position_after_move(mv),
        }
        Ok(())
    }

    /// Overlays the four neighbour kinds around the current position.
    pub fn on_observation(&mut self, neighborhood: &Neighborhood) {
        for (direction, kind) in neighborhood.iter() {
            self.map.observe(self.position.step(direction), kind);
        }
    }

    /// Re-aligns the mirrored position with the world's.
    pub fn sync_position(&mut self, position: Position) {
        if position != self.position {
            warn!(mirrored = %self.position, actual = %position, "explorer position drifted");
            self.position = position;
        }
    }

    /// Re-aligns the mirrored passability mode with the world's.
    pub fn sync_pass_mode(&mut self, mode: PassMode) {
        if mode != self.pass_mode {
            warn!(mirrored = %self.pass_mode, actual = %mode, "explorer mode drifted");
            self.pass_mode = mode;
        }
    }

    #[must_use]
    pub const fn mode(&self) -> AgentMode {
        self.mode
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn pass_mode(&self) -> PassMode {
        self.pass_mode
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub const fn map(&self) -> &PartialMap {
        &self.map
    }

    #[must_use]
    pub const fn ledger(&self) -> &VisitLedger {
        &self.ledger
    }

    #[must_use]
    pub const fn record(&self) -> &BacktrackRecord {
        &self.record
    }

    #[must_use]
    pub const fn stats(&self) -> ExplorerStats {
        self.stats
    }

    /// Candidate scores of the most recent forward choice.
    #[must_use]
    pub fn last_scores(&self) -> &[CandidateScore] {
        &self.last_scores
    }
}
