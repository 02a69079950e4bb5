//! Tests for grid rendering and PNG export

#[cfg(test)]
mod tests {
    use floodbench::io::configuration::{CELL_PIXELS, RECURSIVE_COLOR, WALL_COLOR};
    use floodbench::io::image::{cell_color, export_grid_as_png, render_grid};
    use floodbench::spatial::{CellState, Grid};
    use image::Rgba;

    // Tests every state has a distinct colour
    // Verified by sharing a colour between markers
    #[test]
    fn test_cell_colors_distinct() {
        let colors: Vec<Rgba<u8>> = [
            CellState::Empty,
            CellState::Wall,
            CellState::FilledRecursive,
            CellState::FilledIterative,
        ]
        .into_iter()
        .map(cell_color)
        .collect();

        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(cell_color(CellState::Wall), Rgba(WALL_COLOR));
    }

    // Tests each cell becomes a square block of pixels
    // Verified by swapping width and height
    #[test]
    fn test_render_scales_cells() {
        let grid = Grid::from_codes(&[vec![0, 1, 2]]).unwrap();
        let image = render_grid(&grid, 4);

        assert_eq!(image.dimensions(), (12, 4));
        assert_eq!(*image.get_pixel(5, 3), Rgba(WALL_COLOR));
        assert_eq!(*image.get_pixel(11, 0), Rgba(RECURSIVE_COLOR));
    }

    // Tests a PNG is written, creating missing directories
    // Verified by skipping directory creation
    #[test]
    fn test_export_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("grid.png");
        let grid = Grid::from_codes(&[vec![3, 0], vec![1, 0]]).unwrap();

        export_grid_as_png(&grid, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (2 * CELL_PIXELS, 2 * CELL_PIXELS));
        assert_eq!(*loaded.get_pixel(0, CELL_PIXELS), Rgba(WALL_COLOR));
    }
}
