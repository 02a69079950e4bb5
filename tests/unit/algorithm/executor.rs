//! Tests for the traversal engine: outcomes, timing, pacing and stack exhaustion

#[cfg(test)]
mod tests {
    use floodbench::SimulationError;
    use floodbench::algorithm::{
        FillAlgorithm, FillEngine, Outcome, Pacing, ProgressFn, run,
    };
    use floodbench::spatial::{CellState, Grid, generate};
    use std::time::Duration;

    // Tests both algorithms fill an open 5x5 grid completely
    // Verified by skipping the rightward neighbour in both fills
    #[test]
    fn test_open_grid_filled_by_both() {
        for algorithm in FillAlgorithm::ALL {
            let mut grid = generate(5, 5, 0.0).unwrap();
            let report = run(algorithm, &mut grid, Pacing::Unpaced, None).unwrap();

            assert_eq!(report.algorithm, algorithm);
            assert_eq!(report.outcome, Outcome::Success);
            assert_eq!(report.cells_filled, 25);
            assert_eq!(grid.count(algorithm.marker()), 25);
            assert!(report.elapsed_ms() >= 0.0);
        }
    }

    // Tests deep recursion is reported as a crash instead of aborting
    // Verified by removing the stack budget check from the recursive fill
    #[test]
    fn test_large_open_grid_crashes_recursive() {
        let mut grid = generate(200, 200, 0.0).unwrap();
        let report = run(FillAlgorithm::Recursive, &mut grid, Pacing::Unpaced, None).unwrap();

        assert_eq!(report.outcome, Outcome::Crash);
        assert!(report.cells_filled > 0);
        assert!(report.cells_filled < 200 * 200);
        assert_eq!(grid.count(CellState::FilledRecursive), report.cells_filled);
    }

    // Tests the iterative fill handles the grid that crashes the recursive one
    // Verified by bounding the queue length
    #[test]
    fn test_large_open_grid_succeeds_iterative() {
        let mut grid = generate(200, 200, 0.0).unwrap();
        let report = run(FillAlgorithm::Iterative, &mut grid, Pacing::Unpaced, None).unwrap();

        assert_eq!(report.outcome, Outcome::Success);
        assert_eq!(report.cells_filled, 200 * 200);
    }

    // Tests a smaller stack budget crashes on a smaller grid
    // Verified by ignoring the configured stack size
    #[test]
    fn test_stack_budget_is_configurable() {
        let engine = FillEngine::new(128 * 1024).unwrap();
        let mut grid = generate(100, 100, 0.0).unwrap();
        let report = engine
            .run(FillAlgorithm::Recursive, &mut grid, Pacing::Unpaced, None)
            .unwrap();

        assert_eq!(engine.stack_size(), 128 * 1024);
        assert_eq!(report.outcome, Outcome::Crash);
    }

    // Tests stack sizes within the guard zone are rejected
    // Verified by accepting any stack size
    #[test]
    fn test_engine_rejects_tiny_stack() {
        assert!(matches!(
            FillEngine::new(1024),
            Err(SimulationError::InvalidParameter {
                parameter: "stack_size",
                ..
            })
        ));
    }

    // Tests re-running on a filled grid visits nothing
    // Verified by letting the fills overwrite filled cells
    #[test]
    fn test_rerun_on_filled_grid_is_noop() {
        for first in FillAlgorithm::ALL {
            for second in FillAlgorithm::ALL {
                let mut grid = generate(6, 6, 0.0).unwrap();
                run(first, &mut grid, Pacing::Unpaced, None).unwrap();
                let before = grid.clone();

                let report = run(second, &mut grid, Pacing::Unpaced, None).unwrap();
                assert_eq!(report.outcome, Outcome::Success);
                assert_eq!(report.cells_filled, 0);
                assert_eq!(grid, before);
            }
        }
    }

    // Tests stepped pacing reports every marked cell to the observer
    // Verified by calling the observer once per run instead of per cell
    #[test]
    fn test_stepped_pacing_observes_each_cell() {
        for algorithm in FillAlgorithm::ALL {
            let mut grid = generate(4, 4, 0.0).unwrap();
            let mut filled_seen = Vec::new();
            let mut observe = |g: &Grid| filled_seen.push(g.filled_count());
            let observer: &mut ProgressFn<'_> = &mut observe;

            let report = run(
                algorithm,
                &mut grid,
                Pacing::Stepped(Duration::ZERO),
                Some(observer),
            )
            .unwrap();

            assert_eq!(report.cells_filled, 16);
            assert_eq!(filled_seen, (1..=16).collect::<Vec<_>>());
        }
    }

    // Tests unpaced runs never yield to the observer
    // Verified by always invoking the observer
    #[test]
    fn test_unpaced_run_does_not_observe() {
        let mut grid = generate(4, 4, 0.0).unwrap();
        let mut calls = 0;
        let mut observe = |_: &Grid| calls += 1;
        let observer: &mut ProgressFn<'_> = &mut observe;

        run(FillAlgorithm::Recursive, &mut grid, Pacing::Unpaced, Some(observer)).unwrap();
        assert_eq!(calls, 0);
    }

    // Tests a positive step delay slows the run down
    // Verified by skipping the sleep
    #[test]
    fn test_step_delay_is_applied() {
        let mut grid = generate(2, 2, 0.0).unwrap();
        let report = run(
            FillAlgorithm::Iterative,
            &mut grid,
            Pacing::from_millis(5),
            None,
        )
        .unwrap();

        assert!(report.elapsed >= Duration::from_millis(20));
    }

    // Tests a panicking observer surfaces as a worker failure, not a crash outcome
    // Verified by mapping join errors to Outcome::Crash
    #[test]
    fn test_observer_panic_is_worker_failure() {
        let mut grid = generate(3, 3, 0.0).unwrap();
        let mut observe = |g: &Grid| {
            assert!(g.filled_count() < 2, "observer failed");
        };
        let observer: &mut ProgressFn<'_> = &mut observe;

        let err = run(
            FillAlgorithm::Recursive,
            &mut grid,
            Pacing::Stepped(Duration::ZERO),
            Some(observer),
        )
        .unwrap_err();

        assert!(matches!(err, SimulationError::WorkerFailure { .. }));
        assert!(err.to_string().contains("observer failed"));
    }

    // Tests walls bound the filled region
    // Verified by treating walls as traversable
    #[test]
    fn test_walls_enclose_origin() {
        let codes = vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]];
        for algorithm in FillAlgorithm::ALL {
            let mut grid = Grid::from_codes(&codes).unwrap();
            let report = run(algorithm, &mut grid, Pacing::Unpaced, None).unwrap();

            assert_eq!(report.cells_filled, 1);
            assert_eq!(grid.filled_positions(), vec![(0, 0)]);
            assert_eq!(grid.count(CellState::Wall), 2);
        }
    }

    // Tests display names used in reports
    // Verified by swapping the names
    #[test]
    fn test_algorithm_names() {
        assert_eq!(FillAlgorithm::Recursive.to_string(), "Recursive");
        assert_eq!(FillAlgorithm::Iterative.to_string(), "Iterative");
        assert_eq!(Outcome::Crash.to_string(), "Crash");
        assert_eq!(FillAlgorithm::Recursive.marker(), CellState::FilledRecursive);
        assert_eq!(FillAlgorithm::Iterative.marker(), CellState::FilledIterative);
    }
}
