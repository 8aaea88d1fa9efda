//! Greedy ordering of frontier moves by distance to the exit.
//!
//! This only decides which branch the search tries first; completeness
//! comes from the backtracking, not from the ranking.

use crate::simulation::params::SWITCH_SENTINEL;
use crate::simulation::planning::Move;
use crate::simulation::tile::Position;

/// Score given to one candidate during a choice, kept for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateScore {
    /// The move evaluated
    pub action: Move,
    /// Estimated position after the move
    pub landing: Position,
    /// Manhattan distance from `landing` to the exit
    pub distance: u32,
}

/// Estimated position after `mv` from `from`.
///
/// The switch maps to a far-away sentinel so it ranks behind every step.
#[must_use]
pub fn estimated_landing(from: Position, mv: Move) -> Position {
    match mv {
        Move::Switch => SWITCH_SENTINEL,
        _ => mv.direction().map_or(from, |d| from.step(d)),
    }
}

/// Scores every candidate against the exit, in canonical move order.
#[must_use]
pub fn score_candidates(candidates: &[Move], from: Position, exit: Position) -> Vec<CandidateScore> {
    let mut ordered = candidates.to_vec();
    ordered.sort_by_key(|m| m.ordinal());
    ordered
        .into_iter()
        .map(|action| {
            let landing = estimated_landing(from, action);
            CandidateScore {
                action,
                landing,
                distance: landing.manhattan(exit),
            }
        })
        .collect()
}

/// Picks the candidate closest to the exit.
///
/// Ties go to the earliest move in canonical order. Returns the chosen move,
/// the remaining candidates (canonical order) and the scores, or `None` when
/// there is nothing to choose from.
#[must_use]
pub fn choose_move(
    candidates: &[Move],
    from: Position,
    exit: Position,
) -> Option<(Move, Vec<Move>, Vec<CandidateScore>)> {
    let scores = score_candidates(candidates, from, exit);
    // min_by_key keeps the first of equal minima
    let best = scores.iter().min_by_key(|s| s.distance)?.action;
    let rest = scores
        .iter()
        .map(|s| s.action)
        .filter(|m| *m != best)
        .collect();
    Some((best, rest, scores))
}
