use crate::simulation::error::MazeError;
use crate::simulation::planning::Move;
use crate::simulation::tile::{Direction, Neighborhood, PassMode, Position, TileKind};

/// Read-only view of a world that the explorer is allowed to query.
///
/// The explorer copies what it learns through this trait into its own
/// memory; it never keeps a reference to the world's cells.
pub trait WorldView {
    /// Returns (rows, cols).
    fn dimensions(&self) -> (usize, usize);
    fn legal_moves(&self) -> Vec<Move>;
    fn current_mode(&self) -> PassMode;
    fn actor_position(&self) -> Position;
    fn start_position(&self) -> Position;
    fn exit_position(&self) -> Position;
    fn neighbor_kinds(&self, pos: Position) -> Neighborhood;
}

/// Ground-truth maze: tiles, actor position and the global passability mode.
///
/// Parsed from board text (one string per row). The border must be walls,
/// and exactly one start (`B`) and one exit (`E`) must be present.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<TileKind>,
    rows: usize,
    cols: usize,
    actor: Position,
    start: Position,
    exit: Position,
    mode: PassMode,
    finished: bool,
}

impl Board {
    /// Parses a board from its text rows.
    ///
    /// # Errors
    /// Returns `MazeError::MalformedBoard` for ragged rows, unknown glyphs,
    /// an open border, or a missing/duplicated start or exit.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, MazeError> {
        let rows = lines.len();
        if rows == 0 {
            return Err(MazeError::MalformedBoard("board has no rows".into()));
        }
        let cols = lines[0].as_ref().chars().count();
        if cols == 0 {
            return Err(MazeError::MalformedBoard("board has no columns".into()));
        }

        let mut tiles = Vec::with_capacity(rows * cols);
        let mut start = None;
        let mut exit = None;

        for (r, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != cols {
                return Err(MazeError::MalformedBoard(format!(
                    "row {r} has {} columns, expected {cols}",
                    line.chars().count()
                )));
            }
            for (c, glyph) in line.chars().enumerate() {
                let kind = TileKind::from_glyph(glyph).ok_or_else(|| {
                    MazeError::MalformedBoard(format!("unknown tile {glyph:?} at ({r}, {c})"))
                })?;
                let on_border = r == 0 || c == 0 || r == rows - 1 || c == cols - 1;
                if on_border && kind != TileKind::Wall {
                    return Err(MazeError::MalformedBoard(format!(
                        "border tile at ({r}, {c}) is not a wall"
                    )));
                }
                let pos = Position::new(to_coord(r), to_coord(c));
                match kind {
                    TileKind::Start if start.replace(pos).is_some() => {
                        return Err(MazeError::MalformedBoard("more than one start".into()));
                    }
                    TileKind::Exit if exit.replace(pos).is_some() => {
                        return Err(MazeError::MalformedBoard("more than one exit".into()));
                    }
                    _ => {}
                }
                tiles.push(kind);
            }
        }

        let start = start.ok_or_else(|| MazeError::MalformedBoard("no start tile".into()))?;
        let exit = exit.ok_or_else(|| MazeError::MalformedBoard("no exit tile".into()))?;

        Ok(Self {
            tiles,
            rows,
            cols,
            actor: start,
            start,
            exit,
            mode: PassMode::default(),
            finished: false,
        })
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// Tile at `pos`. Anything outside the grid reads as a wall.
    #[must_use]
    pub fn tile_at(&self, pos: Position) -> TileKind {
        self.index(pos).map_or(TileKind::Wall, |i| self.tiles[i])
    }

    /// Whether the actor may enter `pos` in the current mode.
    #[must_use]
    pub fn is_tile_free(&self, pos: Position) -> bool {
        self.tile_at(pos).is_passable(self.mode)
    }

    /// Whether `mv` is legal from the current state.
    #[must_use]
    pub fn is_move_possible(&self, mv: Move) -> bool {
        if self.finished {
            return false;
        }
        match mv {
            Move::Switch => self.tile_at(self.actor) == TileKind::Switch,
            Move::Finish => self.tile_at(self.actor) == TileKind::Exit,
            _ => self.is_tile_free(self.position_after_move(mv)),
        }
    }

    /// Position the actor would occupy after `mv`.
    #[must_use]
    pub fn position_after_move(&self, mv: Move) -> Position {
        mv.direction()
            .map_or(self.actor, |direction| self.actor.step(direction))
    }

    /// Applies `mv` to the world.
    ///
    /// Returns `Ok(false)` and leaves the state untouched when the move is
    /// not legal right now.
    ///
    /// # Errors
    /// Returns `MazeError::MoveAfterFinish` once a finish has been accepted.
    pub fn apply(&mut self, mv: Move) -> Result<bool, MazeError> {
        if self.finished {
            return Err(MazeError::MoveAfterFinish);
        }
        if !self.is_move_possible(mv) {
            return Ok(false);
        }

        match mv {
            Move::Switch => self.mode = self.mode.toggled(),
            Move::Finish => self.finished = true,
            _ => self.actor = self.position_after_move(mv),
        }
        Ok(true)
    }

    /// Parses and applies a textual command such as `"move left"`.
    ///
    /// # Errors
    /// Returns `MazeError::UnknownMove` for unrecognised commands, plus
    /// anything [`Board::apply`] returns.
    pub fn apply_command(&mut self, command: &str) -> Result<bool, MazeError> {
        let mv: Move = command.parse()?;
        self.apply(mv)
    }

    /// True once a finish move has been accepted.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Row strings in board-text form, without the actor marker.
    #[must_use]
    pub fn rows_text(&self) -> Vec<String> {
        self.tiles
            .chunks(self.cols)
            .map(|row| row.iter().map(|t| t.glyph()).collect())
            .collect()
    }

    /// Tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    /// Number of tiles that are not walls.
    #[must_use]
    pub fn open_tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| **t != TileKind::Wall).count()
    }
}

impl WorldView for Board {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn legal_moves(&self) -> Vec<Move> {
        Move::all()
            .into_iter()
            .filter(|m| self.is_move_possible(*m))
            .collect()
    }

    fn current_mode(&self) -> PassMode {
        self.mode
    }

    fn actor_position(&self) -> Position {
        self.actor
    }

    fn start_position(&self) -> Position {
        self.start
    }

    fn exit_position(&self) -> Position {
        self.exit
    }

    fn neighbor_kinds(&self, pos: Position) -> Neighborhood {
        Neighborhood {
            left: self.tile_at(pos.step(Direction::Left)),
            up: self.tile_at(pos.step(Direction::Up)),
            right: self.tile_at(pos.step(Direction::Right)),
            down: self.tile_at(pos.step(Direction::Down)),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // Boards are tiny
fn to_coord(i: usize) -> i32 {
    i as i32
}
