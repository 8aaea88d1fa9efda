//! Integration tests for complete exploration runs.
//!
//! These tests verify that the full system works together correctly:
//! - The explorer reaches the exit whenever one is reachable
//! - Exhausted searches end in `GoalUnreachable` with nothing left to undo
//! - Runs stay within the bound of the (position, mode) state space

use switchmaze::simulation::boards;
use switchmaze::simulation::driver::{Episode, StepOutcome};
use switchmaze::simulation::environment::{Board, WorldView};
use switchmaze::simulation::error::MazeError;
use switchmaze::simulation::planning::Move;
use switchmaze::simulation::tile::{PassMode, Position};
use switchmaze::ui::DashboardState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashSet, VecDeque};
use std::time::Instant;

fn episode_for(rows: &[&str], max_moves: usize) -> Episode {
    Episode::new(Board::parse(rows).unwrap(), max_moves)
}

/// Ground truth from a breadth-first search over (position, mode) states:
/// the number of states reachable from the start, and whether any of them
/// stands on the exit.
fn reachable_states(board: &Board) -> (usize, bool) {
    let exit = board.exit_position();
    let key = |b: &Board| (b.actor_position(), b.current_mode());

    let mut seen: HashSet<(Position, PassMode)> = HashSet::from([key(board)]);
    let mut queue = VecDeque::from([board.clone()]);
    let mut exit_found = false;

    while let Some(state) = queue.pop_front() {
        exit_found |= state.actor_position() == exit;
        for mv in state.legal_moves() {
            if mv == Move::Finish {
                continue;
            }
            let mut next = state.clone();
            assert!(next.apply(mv).unwrap());
            if seen.insert(key(&next)) {
                queue.push_back(next);
            }
        }
    }
    (seen.len(), exit_found)
}

/// Each state is entered forward and left backward at most once, plus the
/// final finish.
fn turn_bound(states: usize) -> usize {
    2 * states + 1
}

/// Random bordered board with switches and conditional tiles.
fn random_board(rng: &mut StdRng) -> Board {
    let rows = rng.random_range(4..=8);
    let cols = rng.random_range(4..=9);

    let mut grid: Vec<Vec<char>> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    if r == 0 || c == 0 || r + 1 == rows || c + 1 == cols {
                        return 'W';
                    }
                    match rng.random_range(0..100) {
                        0..30 => 'W',
                        30..38 => 'r',
                        38..46 => 'g',
                        46..54 => 'S',
                        _ => ' ',
                    }
                })
                .collect()
        })
        .collect();

    let interior = |rng: &mut StdRng| (rng.random_range(1..rows - 1), rng.random_range(1..cols - 1));
    let start = interior(rng);
    let mut exit = interior(rng);
    while exit == start {
        exit = interior(rng);
    }
    grid[start.0][start.1] = 'B';
    grid[exit.0][exit.1] = 'E';

    let lines: Vec<String> = grid.into_iter().map(|row| row.into_iter().collect()).collect();
    Board::parse(lines.as_slice()).unwrap()
}

/// Runs the explorer on `board` and checks it against the search ground truth.
fn assert_matches_ground_truth(board: Board, label: &str) {
    let (states, exit_reachable) = reachable_states(&board);
    let bound = turn_bound(states);
    let mut episode = Episode::new(board, bound + 10);

    match episode.run() {
        Ok(report) => {
            assert!(exit_reachable, "{label}: finished on an unreachable exit");
            assert_eq!(report.outcome, StepOutcome::Finished, "{label}");
            assert!(
                report.turns <= bound,
                "{label}: {} turns for {states} states",
                report.turns
            );
        }
        Err(MazeError::GoalUnreachable) => {
            assert!(!exit_reachable, "{label}: gave up on a reachable exit");
            assert!(episode.turn() <= bound, "{label}: {} turns", episode.turn());
            assert!(episode.explorer().record().is_empty(), "{label}");
        }
        Err(err) => panic!("{label}: unexpected error {err}"),
    }
}

#[test]
fn test_switchback_is_solved_through_switch() {
    let mut episode = Episode::new(boards::load("switchback").unwrap(), 100);
    let report = episode.run().unwrap();

    assert_eq!(report.outcome, StepOutcome::Finished);
    assert_eq!(report.turns, 12);
    assert!(episode.world().is_finished());
    assert!(episode.explorer().is_finished());
    assert!(
        episode
            .explorer()
            .record()
            .frames()
            .iter()
            .any(|f| f.taken == Move::Switch)
    );
}

#[test]
fn test_enclosed_exit_is_unreachable() {
    let mut episode = episode_for(&["WWWWW", "WB  W", "W WWW", "WWWEW", "WWWWW"], 100);
    assert_eq!(episode.run(), Err(MazeError::GoalUnreachable));
    assert!(episode.explorer().record().is_empty());
    assert_eq!(episode.world().actor_position(), episode.world().start_position());
}

#[test]
fn test_unreachable_under_both_modes() {
    let mut episode = episode_for(&["WWWWWWW", "WBSgWEW", "WWWWWWW"], 100);
    assert_eq!(episode.run(), Err(MazeError::GoalUnreachable));
    assert!(episode.explorer().record().is_empty());
    assert!(episode.explorer().stats().branch_resumes >= 1);
}

#[test]
fn test_straight_corridor_takes_shortest_path() {
    let mut episode = episode_for(&["WWWWWWW", "WB   EW", "WWWWWWW"], 100);
    let start = episode.world().start_position();
    let exit = episode.world().exit_position();

    let report = episode.run().unwrap();
    assert_eq!(report.outcome, StepOutcome::Finished);
    assert_eq!(report.turns, start.manhattan(exit) as usize + 1);
    assert_eq!(report.stats.branch_resumes, 0);
    assert_eq!(report.stats.reverse_steps, 0);
}

#[test]
fn test_every_bundled_board_is_solved_within_bound() {
    for name in boards::NAMES {
        let board = boards::load(name).unwrap();
        let (states, exit_reachable) = reachable_states(&board);
        assert!(exit_reachable, "board {name}");
        let bound = turn_bound(states);
        let mut episode = Episode::new(board, bound);

        let report = episode.run().unwrap();
        assert_eq!(report.outcome, StepOutcome::Finished, "board {name}");
        assert!(report.turns <= bound, "board {name}: {} turns", report.turns);
    }
}

#[test]
fn test_switchback_reachable_states() {
    let board = boards::load("switchback").unwrap();
    let (states, exit_reachable) = reachable_states(&board);
    assert!(exit_reachable);
    assert!(states < 2 * board.open_tile_count());
}

#[test]
fn test_generated_boards_match_ground_truth() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut reachable = 0;
    for i in 0..500 {
        let board = random_board(&mut rng);
        if reachable_states(&board).1 {
            reachable += 1;
        }
        assert_matches_ground_truth(board, &format!("board #{i}"));
    }
    // The family exercises both outcomes
    assert!(reachable > 0 && reachable < 500);
}

#[test]
fn test_move_limit_reports_partial_run() {
    let mut episode = Episode::new(boards::load("labyrinth").unwrap(), 3);
    let report = episode.run().unwrap();
    assert_eq!(report.outcome, StepOutcome::MoveLimitReached);
    assert_eq!(report.turns, 3);
    assert!(!episode.world().is_finished());
}

#[test]
fn test_known_tiles_never_decrease() {
    let mut episode = Episode::new(boards::load("labyrinth").unwrap(), 500);
    let mut known = episode.explorer().map().known_count();
    loop {
        let outcome = episode.step().unwrap();
        let now = episode.explorer().map().known_count();
        assert!(now >= known);
        known = now;
        if outcome != StepOutcome::Continue {
            break;
        }
    }
}

#[test]
fn test_dashboard_snapshot_tracks_episode() {
    let mut episode = Episode::new(boards::load("switchback").unwrap(), 100);
    for _ in 0..4 {
        episode.step().unwrap();
    }

    let state = DashboardState::from_episode(&episode);
    assert_eq!(state.turn, 4);
    assert_eq!(state.position, episode.world().actor_position());
    assert_eq!(state.world_rows.len(), 7);
    assert_eq!(state.agent_rows.len(), 7);
    assert_eq!(state.recent.len(), 4);
    assert_eq!(state.path.len(), state.depth);
    assert!(state.hud_line().contains("Turn: 4/100"));
}

#[test]
fn test_labyrinth_runs_quickly() {
    let start = Instant::now();
    for _ in 0..50 {
        let mut episode = Episode::new(boards::load("labyrinth").unwrap(), 500);
        episode.run().unwrap();
    }
    let elapsed = start.elapsed();

    println!("50 labyrinth runs took {elapsed:?}");
    assert!(elapsed.as_secs() < 5, "Exploration too slow: {elapsed:?}");
}
