#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info};

use switchmaze::config::{RunSection, load_config};
use switchmaze::observability;
use switchmaze::simulation::{Episode, MazeError, StepOutcome, boards};
use switchmaze::ui::{DashboardState, field::compute_partial_rows, render::draw_dashboard};

fn main() -> anyhow::Result<()> {
    let config = load_config(None).context("Failed to load configuration")?;
    let run = config.run;
    observability::init(run.headless);

    let board = boards::load(&run.board)
        .with_context(|| format!("Unknown board (available: {})", boards::NAMES.join(", ")))?;
    let mut episode = Episode::new(board, run.max_moves);
    info!(board = %run.board, max_moves = run.max_moves, "starting exploration");

    if run.headless {
        return run_headless(&mut episode, run.step_mode);
    }

    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut episode, &run);

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Plays the episode on the console, printing the trace through `tracing`.
///
/// In step mode every turn waits for Enter; entering `f` switches to free
/// running for the rest of the episode.
fn run_headless(episode: &mut Episode, mut step_mode: bool) -> anyhow::Result<()> {
    info!("board:\n{}", episode.world().rows_text().join("\n"));

    let stdin = io::stdin();
    loop {
        let outcome = episode.step();
        let explorer = episode.explorer();
        debug!(
            mode = %explorer.pass_mode(),
            "explorer map:\n{}",
            compute_partial_rows(explorer.map(), explorer.position()).join("\n")
        );

        match outcome {
            Ok(StepOutcome::Continue) => {}
            Ok(outcome) => {
                let report = episode.report(outcome);
                info!(outcome = ?report.outcome, turns = report.turns, stats = ?report.stats, "run complete");
                return Ok(());
            }
            Err(MazeError::GoalUnreachable) => {
                error!(turns = episode.turn(), "goal is not reachable");
                return Err(MazeError::GoalUnreachable).context("Exploration exhausted the maze");
            }
            Err(err) => return Err(err).context("Exploration aborted"),
        }

        if step_mode {
            print!("[enter: next turn, f: free run] ");
            io::stdout().flush()?;
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
            if line.trim().eq_ignore_ascii_case("f") {
                step_mode = false;
            }
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    episode: &mut Episode,
    run: &RunSection,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(run.tick_ms);
    let mut paused = run.step_mode;
    let mut step_requested = false;
    let mut status = String::from("q: quit | space: step | p: play/pause");
    let mut done = false;
    let mut last_tick = Instant::now();

    loop {
        // 1. Update
        let due = !paused && last_tick.elapsed() >= tick_rate;
        if !done && (due || step_requested) {
            step_requested = false;
            match episode.step() {
                Ok(StepOutcome::Continue) => {}
                Ok(StepOutcome::Finished) => {
                    done = true;
                    status = format!("Exit reached after {} turns. q: quit", episode.turn());
                }
                Ok(StepOutcome::MoveLimitReached) => {
                    done = true;
                    status = format!("Move limit of {} reached. q: quit", episode.max_moves());
                }
                Err(err) => {
                    done = true;
                    status = format!("{err}. q: quit");
                }
            }
            last_tick = Instant::now();
        }

        // 2. Render
        let state = DashboardState::from_episode(episode);
        terminal.draw(|f| draw_dashboard(f, &state, &status))?;

        // 3. Input
        let timeout = if paused || done {
            tick_rate
        } else {
            tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0))
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char(' ') => step_requested = true,
                    KeyCode::Char('p') => paused = !paused,
                    _ => {}
                }
            }
        }
    }
}
