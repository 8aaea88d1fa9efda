use switchmaze::simulation::boards;
use switchmaze::simulation::environment::WorldView;
use switchmaze::simulation::memory::PartialMap;
use switchmaze::simulation::tile::{PassMode, Position, TileKind};
use switchmaze::ui::field::{compute_board_rows, compute_map_rows, compute_partial_rows};

#[test]
fn test_map_rows_dimensions_and_glyphs() {
    let board = boards::load("labyrinth").unwrap();
    let (rows, cols) = board.dimensions();

    let grid = compute_board_rows(board.tiles(), rows, cols, board.actor_position());

    assert_eq!(grid.len(), rows);
    for row in &grid {
        assert_eq!(row.chars().count(), cols);
        for c in row.chars() {
            assert!("W.BESrg@".contains(c), "unexpected glyph {c:?}");
        }
    }
    assert_eq!(grid[5], "W@..S.W.WW");
}

#[test]
fn test_unknown_cells_render_blank() {
    let mut map = PartialMap::new(3, 4);
    map.observe(Position::new(1, 1), TileKind::Conditional(PassMode::Green));

    let grid = compute_partial_rows(&map, Position::new(1, 2));
    assert_eq!(grid, vec!["WWWW", "Wg@W", "WWWW"]);

    let mut map = PartialMap::new(3, 5);
    map.observe(Position::new(1, 1), TileKind::Empty);
    let grid = compute_partial_rows(&map, Position::new(1, 1));
    assert_eq!(grid[1], "W@  W");
}

#[test]
fn test_actor_outside_grid_is_not_drawn() {
    let cells = vec![Some(TileKind::Empty); 4];
    let grid = compute_map_rows(&cells, 2, 2, Some(Position::new(5, 5)));
    assert_eq!(grid, vec!["..", ".."]);
}

#[test]
fn test_short_cell_slice_renders_nothing() {
    let cells = vec![None; 3];
    assert!(compute_map_rows(&cells, 2, 2, None).is_empty());
}
