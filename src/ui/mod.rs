pub mod field;
pub mod render;

use crate::simulation::agent::{AgentMode, ExplorerStats};
use crate::simulation::driver::{Episode, TurnRecord};
use crate::simulation::environment::WorldView;
use crate::simulation::planning::CandidateScore;
use crate::simulation::tile::{PassMode, Position};

use self::field::{compute_board_rows, compute_partial_rows};

/// Snapshot of an episode for dashboard rendering.
#[derive(Clone, Debug)]
pub struct DashboardState {
    // Progress
    pub turn: usize,
    pub max_moves: usize,
    pub finished: bool,

    // Actor
    pub position: Position,
    pub exit: Position,
    pub pass_mode: PassMode,

    // Search
    pub agent_mode: AgentMode,
    pub depth: usize,
    pub max_depth: usize,
    pub stats: ExplorerStats,
    pub path: Vec<String>,
    pub candidates: Vec<CandidateScore>,

    // Maps
    pub world_rows: Vec<String>,
    pub agent_rows: Vec<String>,
    pub known_tiles: usize,
    pub visited_states: usize,

    pub recent: Vec<TurnRecord>,
}

impl DashboardState {
    /// Creates a dashboard snapshot from an episode.
    #[must_use]
    pub fn from_episode(episode: &Episode) -> Self {
        let world = episode.world();
        let explorer = episode.explorer();
        let (rows, cols) = world.dimensions();
        let position = world.actor_position();

        Self {
            turn: episode.turn(),
            max_moves: episode.max_moves(),
            finished: world.is_finished(),
            position,
            exit: world.exit_position(),
            pass_mode: world.current_mode(),
            agent_mode: explorer.mode(),
            depth: explorer.record().depth(),
            max_depth: explorer.record().max_depth(),
            stats: explorer.stats(),
            path: explorer.record().path().map(|m| m.to_string()).collect(),
            candidates: explorer.last_scores().to_vec(),
            world_rows: compute_board_rows(world.tiles(), rows, cols, position),
            agent_rows: compute_partial_rows(explorer.map(), explorer.position()),
            known_tiles: explorer.map().known_count(),
            visited_states: explorer.ledger().visited_count(),
            recent: episode.recent_turns().cloned().collect(),
        }
    }

    /// One-line summary for the HUD.
    #[must_use]
    pub fn hud_line(&self) -> String {
        let mode = match self.agent_mode {
            AgentMode::Forward => "forward",
            AgentMode::Backtrack => "backtrack",
        };
        format!(
            "Turn: {}/{} | Pos: {} | Mode: {} | Search: {} | Depth: {} (max {}) | Known: {} | Visited: {}",
            self.turn,
            self.max_moves,
            self.position,
            self.pass_mode,
            mode,
            self.depth,
            self.max_depth,
            self.known_tiles,
            self.visited_states,
        )
    }
}
