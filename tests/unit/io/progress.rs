//! Tests for the progress manager bookkeeping

#[cfg(test)]
mod tests {
    use floodbench::algorithm::{FillAlgorithm, Outcome};
    use floodbench::io::progress::ProgressManager;
    use std::time::Duration;

    // Tests the fill bar is sized for the run and reaches the filled count
    // Verified by leaving the bar length at zero
    #[test]
    fn test_fill_bar_tracks_run() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);
        pm.start_run(FillAlgorithm::Iterative, 1, 25);

        let bar = pm.fill_handle().unwrap();
        assert_eq!(bar.length(), Some(25));
        assert_eq!(bar.position(), 0);
        bar.inc(3);

        pm.complete_run(Outcome::Success, 25, Duration::from_millis(2));
        assert_eq!(bar.position(), 25);
        assert_eq!(pm.completed(), 1);
        pm.finish();
    }

    // Tests runs are counted with and without bars
    // Verified by counting only successful runs
    #[test]
    fn test_completed_counts_crashes() {
        let mut pm = ProgressManager::default();
        assert!(pm.fill_handle().is_none());

        pm.complete_run(Outcome::Crash, 10, Duration::ZERO);
        pm.complete_run(Outcome::Success, 25, Duration::ZERO);
        assert_eq!(pm.completed(), 2);
    }
}
