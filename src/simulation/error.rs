//! Error types shared by the world model, the explorer and the driver loop.

use thiserror::Error;

/// Fatal conditions that halt a run.
///
/// Rejected moves are not errors: `Board::apply` reports them as `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Unknown move: {0}")]
    UnknownMove(String),

    /// The backtrack record ran dry: no reachable state leads to the exit.
    #[error("Goal is not reachable")]
    GoalUnreachable,

    #[error("Move requested after the run already finished")]
    MoveAfterFinish,

    #[error("Malformed board: {0}")]
    MalformedBoard(String),

    #[error("Unknown board: {0}")]
    UnknownBoard(String),
}
