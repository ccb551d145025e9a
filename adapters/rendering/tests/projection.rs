use glam::Vec2;
use retro_snake_core::{CellCoord, GridSize};
use retro_snake_rendering::{
    Color, GridPresentation, DEFAULT_BORDER_OFFSET, DEFAULT_CELL_SIZE,
};

#[test]
fn default_projection_matches_the_original_layout() {
    let grid = GridPresentation::with_defaults(GridSize::new(25));

    assert_eq!(grid.cell_size(), DEFAULT_CELL_SIZE);
    assert_eq!(grid.border_offset(), DEFAULT_BORDER_OFFSET);
    assert_eq!(grid.field_span(), 750.0);
    assert_eq!(grid.window_span(), 900.0);
}

#[test]
fn cell_origin_offsets_by_the_border() {
    let grid = GridPresentation::with_defaults(GridSize::new(25));

    assert_eq!(grid.cell_origin(CellCoord::new(0, 0)), Vec2::new(75.0, 75.0));
    assert_eq!(
        grid.cell_origin(CellCoord::new(24, 9)),
        Vec2::new(75.0 + 24.0 * 30.0, 75.0 + 9.0 * 30.0)
    );
}

#[test]
fn cell_center_sits_half_a_cell_inside_the_origin() {
    let grid = GridPresentation::with_defaults(GridSize::new(25));

    assert_eq!(
        grid.cell_center(CellCoord::new(0, 0)),
        Vec2::new(90.0, 90.0)
    );
}

#[test]
fn out_of_field_cells_still_project() {
    // The head may briefly leave the field on the frame the run ends; the
    // projection must keep producing coordinates for it.
    let grid = GridPresentation::with_defaults(GridSize::new(25));

    assert_eq!(
        grid.cell_origin(CellCoord::new(-1, 0)),
        Vec2::new(45.0, 75.0)
    );
}

#[test]
fn with_alpha_clamps_the_channel() {
    let color = Color::from_rgb_u8(43, 51, 24);
    assert_eq!(color.with_alpha(0.5).alpha, 0.5);
    assert_eq!(color.with_alpha(2.0).alpha, 1.0);
    assert_eq!(color.with_alpha(-1.0).alpha, 0.0);
}
