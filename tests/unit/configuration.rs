//! Tests for grid construction constants

#[cfg(test)]
mod tests {
    use cellgrid::Grid;
    use cellgrid::configuration::{DEFAULT_DIMENSION, NEIGHBOR_COUNT};

    // Tests the fallback dimension matches a default-constructed grid
    // Verified by changing DEFAULT_DIMENSION to 5
    #[test]
    fn test_default_dimension_matches_default_grid() {
        let grid: Grid<u8> = Grid::default();
        assert_eq!(grid.dimensions(), (DEFAULT_DIMENSION, DEFAULT_DIMENSION));
        assert_eq!(DEFAULT_DIMENSION, 4);
    }

    // Tests large non-negative dimensions are honored, never replaced by the fallback
    // Verified by capping dimensions at 10_000 in the dimension check
    #[test]
    fn test_large_dimensions_are_accepted() {
        let grid = Grid::new(10_001_usize, 1, 0_u8);
        assert_eq!(grid.dimensions(), (10_001, 1));
        assert_ne!(grid.width(), DEFAULT_DIMENSION);

        let mut grid = Grid::new(1, 1, 0_u8);
        grid.set_cell(0, 0, 9);
        assert!(grid.resize(1, 20_000).is_ok());
        assert_eq!(grid.dimensions(), (1, 20_000));
        assert_eq!(grid.get_cell(0, 0), Some(&9));
        assert_eq!(grid.get_cell(0, 19_999), Some(&0));
    }

    // Tests only dimensions that cannot be a usize fall back or fail
    // Verified by accepting negative dimensions as zero
    #[test]
    fn test_unrepresentable_dimensions_fall_back() {
        let grid = Grid::new(-1_i64, 2, 0_u8);
        assert_eq!(grid.dimensions(), (DEFAULT_DIMENSION, 2));

        let mut grid = Grid::new(2, 2, 0_u8);
        assert!(grid.resize(i128::MIN, 2).is_err());
        assert_eq!(grid.dimensions(), (2, 2));
    }

    // Tests the neighbor count matches an interior neighbor scan
    // Verified by dropping the last neighbor offset
    #[test]
    fn test_neighbor_count_matches_scan() {
        let grid = Grid::new(3, 3, 0u8);
        assert_eq!(grid.neighbors(1, 1).count(), NEIGHBOR_COUNT);
    }
}
