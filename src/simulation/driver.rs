//! Turn-by-turn driver connecting the world model and the explorer.

use std::collections::VecDeque;

use crate::simulation::agent::{Explorer, ExplorerStats};
use crate::simulation::environment::{Board, WorldView};
use crate::simulation::error::MazeError;
use crate::simulation::params::HISTORY_SIZE;
use crate::simulation::planning::Move;
use crate::simulation::tile::{PassMode, Position};
use tracing::info;

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    pub turn: usize,
    pub legal: Vec<Move>,
    pub chosen: Move,
    pub succeeded: bool,
    /// Actor position after the move
    pub position: Position,
    /// Passability mode after the move
    pub pass_mode: PassMode,
}

/// Result of a single call to [`Episode::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Finished,
    MoveLimitReached,
}

/// Summary of a run that ended without a fatal error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: StepOutcome,
    pub turns: usize,
    pub stats: ExplorerStats,
}

/// One exploration run: a world, an explorer bound to it, and a move ceiling.
#[derive(Clone, Debug)]
pub struct Episode {
    world: Board,
    explorer: Explorer,
    max_moves: usize,
    turn: usize,
    recent: VecDeque<TurnRecord>,
}

impl Episode {
    #[must_use]
    pub fn new(world: Board, max_moves: usize) -> Self {
        let explorer = Explorer::new(&world);
        Self {
            world,
            explorer,
            max_moves,
            turn: 0,
            recent: VecDeque::with_capacity(HISTORY_SIZE),
        }
    }

    /// Plays one turn: decide, apply, then feed the outcome and percept back.
    ///
    /// # Errors
    /// Propagates `GoalUnreachable` from the explorer and `MoveAfterFinish`
    /// if called again after a successful finish.
    pub fn step(&mut self) -> Result<StepOutcome, MazeError> {
        if self.world.is_finished() {
            return Err(MazeError::MoveAfterFinish);
        }
        if self.turn >= self.max_moves {
            return Ok(StepOutcome::MoveLimitReached);
        }

        self.explorer.sync_position(self.world.actor_position());
        self.explorer.sync_pass_mode(self.world.current_mode());
        let legal = self.world.legal_moves();
        let chosen = self.explorer.decide(&legal)?;
        let succeeded = self.world.apply(chosen)?;

        let legal_names: Vec<&str> = legal.iter().map(|m| m.as_str()).collect();
        info!(
            turn = self.turn,
            legal = ?legal_names,
            chosen = %chosen,
            succeeded,
            "turn"
        );

        self.explorer.on_move_outcome(chosen, succeeded)?;
        let position = self.world.actor_position();
        self.explorer
            .on_observation(&self.world.neighbor_kinds(position));

        self.remember(TurnRecord {
            turn: self.turn,
            legal,
            chosen,
            succeeded,
            position,
            pass_mode: self.world.current_mode(),
        });
        self.turn += 1;

        if chosen == Move::Finish && succeeded {
            info!(turns = self.turn, "exit reached");
            return Ok(StepOutcome::Finished);
        }
        Ok(StepOutcome::Continue)
    }

    /// Steps until the exit is reached or the move ceiling is hit.
    ///
    /// # Errors
    /// Any error from [`Episode::step`], most notably `GoalUnreachable`.
    pub fn run(&mut self) -> Result<RunReport, MazeError> {
        loop {
            let outcome = self.step()?;
            if outcome != StepOutcome::Continue {
                return Ok(self.report(outcome));
            }
        }
    }

    fn remember(&mut self, record: TurnRecord) {
        if self.recent.len() == HISTORY_SIZE {
            self.recent.pop_front();
        }
        self.recent.push_back(record);
    }

    #[must_use]
    pub fn report(&self, outcome: StepOutcome) -> RunReport {
        RunReport {
            outcome,
            turns: self.turn,
            stats: self.explorer.stats(),
        }
    }

    #[must_use]
    pub const fn world(&self) -> &Board {
        &self.world
    }

    #[must_use]
    pub const fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    /// Number of turns played so far.
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub const fn max_moves(&self) -> usize {
        self.max_moves
    }

    /// The most recent turns, oldest first.
    pub fn recent_turns(&self) -> impl Iterator<Item = &TurnRecord> {
        self.recent.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_limit_stops_run() {
        let board = Board::parse(&["WWWWWWW", "WB   EW", "WWWWWWW"]).unwrap();
        let mut episode = Episode::new(board, 2);
        let report = episode.run().unwrap();
        assert_eq!(report.outcome, StepOutcome::MoveLimitReached);
        assert_eq!(report.turns, 2);
        assert_eq!(episode.world().actor_position(), Position::new(1, 3));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut row = String::from("WB");
        row.push_str(&" ".repeat(HISTORY_SIZE + 5));
        row.push_str("EW");
        let wall = "W".repeat(row.len());
        let board = Board::parse(&[wall.as_str(), row.as_str(), wall.as_str()]).unwrap();

        let mut episode = Episode::new(board, 1000);
        let report = episode.run().unwrap();
        assert_eq!(report.outcome, StepOutcome::Finished);
        assert_eq!(episode.recent_turns().count(), HISTORY_SIZE);
        assert_eq!(
            episode.recent_turns().last().map(|t| t.chosen),
            Some(Move::Finish)
        );
    }

    #[test]
    fn test_step_after_finish_is_an_error() {
        let board = Board::parse(&["WWWWW", "WBEWW", "WWWWW"]).unwrap();
        let mut episode = Episode::new(board, 10);
        assert_eq!(episode.step(), Ok(StepOutcome::Continue));
        assert_eq!(episode.step(), Ok(StepOutcome::Finished));
        assert_eq!(episode.step(), Err(MazeError::MoveAfterFinish));
    }
}
