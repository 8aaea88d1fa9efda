//! Planning systems for the exploring agent.
//!
//! This module provides:
//! - The move vocabulary and its inverses
//! - Distance-to-exit ranking of frontier moves
//! - The backtrack record driving depth-first search

mod backtrack;
mod heuristic;
mod moves;

pub use backtrack::{BacktrackRecord, Frame};
pub use heuristic::{CandidateScore, choose_move, estimated_landing, score_candidates};
pub use moves::Move;
