use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::DashboardState;

/// Draws the full dashboard: HUD, the true maze, the explorer's map, the
/// turn log and the search panel.
pub fn draw_dashboard(f: &mut Frame, state: &DashboardState, status: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // HUD
            Constraint::Min(5),    // Maps
            Constraint::Length(12), // Log + search
            Constraint::Length(1), // Status
        ])
        .split(f.area());

    let hud = Paragraph::new(Span::styled(
        state.hud_line(),
        Style::default().add_modifier(Modifier::REVERSED),
    ));
    f.render_widget(hud, chunks[0]);

    let maps = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    draw_grid(f, maps[0], "World", &state.world_rows);
    draw_grid(f, maps[1], "Explorer's map", &state.agent_rows);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    draw_turn_log(f, lower[0], state);
    draw_search_panel(f, lower[1], state);

    let status_style = if state.finished {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(Paragraph::new(Span::styled(status, status_style)), chunks[3]);
}

fn draw_grid(f: &mut Frame, area: Rect, title: &str, rows: &[String]) {
    let text: Vec<Line> = rows.iter().map(|s| Line::from(Span::raw(s.as_str()))).collect();
    let grid = Paragraph::new(text)
        .block(Block::default().title(title).borders(Borders::ALL))
        .style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(grid, area);
}

fn draw_turn_log(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Newest turns last, trimmed to what fits inside the borders
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = state.recent.len().saturating_sub(visible);
    let lines: Vec<Line> = state
        .recent
        .iter()
        .skip(skip)
        .map(|t| {
            let style = if t.succeeded {
                Style::default()
            } else {
                Style::default().fg(Color::Red)
            };
            Line::from(Span::styled(
                format!(
                    "#{:<4} {:<11} -> {} [{}] {}",
                    t.turn,
                    t.chosen.as_str(),
                    t.position,
                    t.pass_mode,
                    if t.succeeded { "ok" } else { "rejected" }
                ),
                style,
            ))
        })
        .collect();

    let log = Paragraph::new(lines).block(Block::default().title("Turns").borders(Borders::ALL));
    f.render_widget(log, area);
}

fn draw_search_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mut lines = vec![Line::from(format!(
        "forward {} | reverse {} | resumes {} | stale {}",
        state.stats.forward_steps,
        state.stats.reverse_steps,
        state.stats.branch_resumes,
        state.stats.stale_alternatives,
    ))];

    if state.candidates.is_empty() {
        lines.push(Line::from("no forward choice this turn"));
    } else {
        let best = state.candidates.iter().map(|c| c.distance).min();
        for c in &state.candidates {
            let style = if Some(c.distance) == best {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("{:<11} lands {} dist {}", c.action.as_str(), c.landing, c.distance),
                style,
            )));
        }
    }

    let tail = state.path.len().saturating_sub(6);
    lines.push(Line::from(format!(
        "path: {}{}",
        if tail > 0 { "... " } else { "" },
        state.path[tail..].join(", ")
    )));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(format!("Search (exit {})", state.exit))
            .borders(Borders::ALL),
    );
    f.render_widget(panel, area);
}
