//! Tests for the breadth-first fill order and queue behaviour

#[cfg(test)]
mod tests {
    use floodbench::algorithm::iterative::fill;
    use floodbench::algorithm::pacing::{Pacing, ProgressFn, Stepper};
    use floodbench::spatial::{CellState, Grid};
    use std::time::Duration;

    fn marking_order(grid: &mut Grid) -> Vec<(usize, usize)> {
        let (rows, cols) = grid.dimensions();
        let mut order = Vec::new();
        let mut last = grid.clone();
        let mut observe = |g: &Grid| {
            for row in 0..rows {
                for col in 0..cols {
                    if g.get(row, col) != last.get(row, col) {
                        order.push((row, col));
                    }
                }
            }
            last = g.clone();
        };
        let observer: &mut ProgressFn<'_> = &mut observe;
        let mut stepper = Stepper::new(Pacing::Stepped(Duration::ZERO), Some(observer));
        fill(grid, &mut stepper);
        order
    }

    // Tests cells are marked in order of distance from the origin
    // Verified by popping from the back of the queue
    #[test]
    fn test_marks_in_breadth_first_order() {
        let mut grid = Grid::empty(3, 3);
        let order = marking_order(&mut grid);

        assert_eq!(
            order,
            vec![
                (0, 0),
                (1, 0),
                (0, 1),
                (2, 0),
                (1, 1),
                (0, 2),
                (2, 1),
                (1, 2),
                (2, 2),
            ]
        );
        let distances: Vec<usize> = order.iter().map(|(r, c)| r + c).collect();
        assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    // Tests every cell is marked exactly once
    // Verified by marking after dequeue instead of before enqueue
    #[test]
    fn test_each_cell_marked_once() {
        let mut grid = Grid::empty(5, 4);
        let order = marking_order(&mut grid);

        assert_eq!(order.len(), 20);
        assert_eq!(grid.count(CellState::FilledIterative), 20);
    }

    // Tests a non-empty origin completes immediately
    // Verified by seeding the queue unconditionally
    #[test]
    fn test_non_empty_origin_visits_nothing() {
        let mut grid = Grid::empty(3, 3);
        grid.set(0, 0, CellState::FilledRecursive);
        let mut stepper = Stepper::new(Pacing::Unpaced, None);

        fill(&mut grid, &mut stepper);

        assert_eq!(stepper.marked(), 0);
        assert_eq!(grid.count(CellState::Empty), 8);
    }

    // Tests walls split the grid and only the origin's region is filled
    // Verified by allowing diagonal moves
    #[test]
    fn test_fill_stops_at_walls() {
        let mut grid =
            Grid::from_codes(&[vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]).unwrap();
        let mut stepper = Stepper::new(Pacing::Unpaced, None);

        fill(&mut grid, &mut stepper);

        assert_eq!(stepper.marked(), 3);
        assert_eq!(grid.filled_positions(), vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(grid.count(CellState::Empty), 3);
    }
}
