//! Terminal progress display for batches of trials

use crate::algorithm::{FillAlgorithm, Outcome};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates a batch bar over all runs and a fill bar for the current run
///
/// The fill bar only moves for paced runs, where the engine yields after each
/// marked cell; unpaced runs jump straight to their final count.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    fill_bar: Option<ProgressBar>,
    completed: usize,
    crashes: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>14} [{bar:30.cyan/blue}] {pos}/{len} cells {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Runs: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a progress manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            fill_bar: None,
            completed: 0,
            crashes: 0,
        }
    }

    /// Create the batch bar for `total_runs` runs and the per-run fill bar
    pub fn initialize(&mut self, total_runs: usize) {
        let batch_bar = ProgressBar::new(total_runs as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));

        let fill_bar = ProgressBar::new(0);
        fill_bar.set_style(FILL_STYLE.clone());
        self.fill_bar = Some(self.multi_progress.add(fill_bar));
    }

    /// Reset the fill bar for a new run over `open_cells` traversable cells
    pub fn start_run(&self, algorithm: FillAlgorithm, trial: usize, open_cells: usize) {
        if let Some(bar) = &self.fill_bar {
            bar.set_length(open_cells as u64);
            bar.set_position(0);
            bar.set_prefix(format!("{algorithm} #{trial}"));
            bar.set_message(String::new());
        }
    }

    /// Handle to the fill bar for updates from inside a paced run
    pub fn fill_handle(&self) -> Option<ProgressBar> {
        self.fill_bar.clone()
    }

    /// Record a finished run
    pub fn complete_run(&mut self, outcome: Outcome, cells_filled: usize, elapsed: Duration) {
        self.completed += 1;
        if outcome == Outcome::Crash {
            self.crashes += 1;
        }

        if let Some(bar) = &self.fill_bar {
            bar.set_position(cells_filled as u64);
            bar.set_message(match outcome {
                Outcome::Success => format!("{:.2}ms", elapsed.as_secs_f64() * 1000.0),
                Outcome::Crash => "stack overflow".to_string(),
            });
        }
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
            if self.crashes > 0 {
                bar.set_message(format!("({} crashed)", self.crashes));
            }
        }
    }

    /// Number of runs completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(bar) = &self.fill_bar {
            bar.finish_and_clear();
        }
        if let Some(bar) = &self.batch_bar {
            bar.finish_with_message("All runs finished");
        }
        let _ = self.multi_progress.clear();
    }
}
