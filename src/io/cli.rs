//! Command-line interface for running batches of flood-fill trials

use crate::algorithm::{FillAlgorithm, Outcome, ProgressFn};
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_DENSITY, DEFAULT_ROWS, DEFAULT_SEED, DEFAULT_STACK_KIB,
    DEFAULT_STEP_DELAY_MS, DEFAULT_TRIALS, SETTLE_DELAY_MS, SimulationConfig,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::report::render_report;
use crate::io::visualization::VisualizationCapture;
use crate::session::SessionController;
use crate::spatial::{CellState, Grid};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Which strategies a batch runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Depth-first only
    Recursive,
    /// Breadth-first only
    Iterative,
    /// Both, recursive first within each trial
    Both,
}

impl AlgorithmChoice {
    /// Strategies in run order
    pub const fn algorithms(self) -> &'static [FillAlgorithm] {
        match self {
            Self::Recursive => &[FillAlgorithm::Recursive],
            Self::Iterative => &[FillAlgorithm::Iterative],
            Self::Both => &FillAlgorithm::ALL,
        }
    }
}

#[derive(Parser)]
#[command(name = "floodbench")]
#[command(
    author,
    version,
    about = "Compare recursive and iterative flood fill on random grids"
)]
/// Command-line arguments for the flood-fill benchmark
pub struct Cli {
    /// Number of grid rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Probability of each cell except the origin being a wall
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Pause after each visited cell in milliseconds (0 runs unpaced)
    #[arg(long = "delay", value_name = "MS", default_value_t = DEFAULT_STEP_DELAY_MS)]
    pub step_delay_ms: u64,

    /// Trials per algorithm
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Algorithms to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,

    /// Random seed for reproducible grids
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Stack size of the recursive fill worker in KiB
    #[arg(long, value_name = "KIB", default_value_t = DEFAULT_STACK_KIB)]
    pub stack_kib: usize,

    /// Directory to write a PNG of each run's final grid into
    #[arg(long, value_name = "DIR")]
    pub snapshot: Option<PathBuf>,

    /// Directory to write a GIF of each paced run into
    #[arg(long, value_name = "DIR")]
    pub animate: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Simulation parameters described by the arguments
    pub const fn config(&self) -> SimulationConfig {
        SimulationConfig {
            rows: self.rows,
            cols: self.cols,
            density: self.density,
            step_delay_ms: self.step_delay_ms,
            stack_size: self.stack_kib.saturating_mul(1024),
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one session of trials and renders its report
pub struct BenchmarkRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BenchmarkRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate the grid, run every trial, commit each result and render the report
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments fail validation, a run fails, or an
    /// export cannot be written
    pub fn run(&mut self) -> Result<String> {
        if self.cli.trials == 0 {
            return Err(invalid_parameter(
                "trials",
                &self.cli.trials,
                &"must be positive",
            ));
        }

        let mut controller = SessionController::with_seed(self.cli.config(), self.cli.seed)?;
        let open_cells = controller.start_session()?.count(CellState::Empty);
        let algorithms = self.cli.algorithm.algorithms();
        info!(
            grid = %controller.config().dimensions_label(),
            density = controller.config().density,
            open_cells,
            trials = self.cli.trials,
            "benchmark started"
        );

        if let Some(pm) = &mut self.progress_manager {
            pm.initialize(self.cli.trials * algorithms.len());
        }

        for trial in 1..=self.cli.trials {
            for &algorithm in algorithms {
                self.run_trial(&mut controller, algorithm, trial, open_cells)?;
            }
        }

        if let Some(pm) = &self.progress_manager {
            pm.finish();
        }

        let report = render_report(controller.ledger());
        controller.end_session()?;
        Ok(report)
    }

    fn run_trial(
        &mut self,
        controller: &mut SessionController,
        algorithm: FillAlgorithm,
        trial: usize,
        open_cells: usize,
    ) -> Result<()> {
        let paced = self.cli.step_delay_ms > 0;
        if let Some(pm) = &self.progress_manager {
            pm.start_run(algorithm, trial, open_cells);
        }

        let mut capture = match (&self.cli.animate, controller.baseline()) {
            (Some(_), Some(baseline)) if paced => Some(VisualizationCapture::new(baseline)),
            (Some(_), _) => {
                warn!("animation needs a positive --delay; skipping GIF export");
                None
            }
            _ => None,
        };

        if paced {
            std::thread::sleep(Duration::from_millis(SETTLE_DELAY_MS));
        }

        let pending = {
            let fill_bar = self
                .progress_manager
                .as_ref()
                .and_then(ProgressManager::fill_handle);
            let mut observe = |grid: &Grid| {
                if let Some(bar) = &fill_bar {
                    bar.inc(1);
                }
                if let Some(capture) = capture.as_mut() {
                    capture.observe(grid);
                }
            };
            let observer: &mut ProgressFn<'_> = &mut observe;
            controller.run(algorithm, Some(observer))?.clone()
        };

        if let Some(pm) = &mut self.progress_manager {
            pm.complete_run(
                pending.outcome,
                pending.cells_filled,
                Duration::from_secs_f64(pending.elapsed_ms / 1000.0),
            );
        }
        if pending.outcome == Outcome::Crash {
            warn!(trial, "recursive fill crashed with a stack overflow");
        }

        if let Some(dir) = &self.cli.snapshot {
            export_grid_as_png(controller.grid(), &output_path(dir, algorithm, trial, "png"))?;
        }
        if let (Some(dir), Some(capture)) = (&self.cli.animate, &capture) {
            let frame_delay = u32::try_from(self.cli.step_delay_ms).unwrap_or(u32::MAX);
            capture.export_gif(&output_path(dir, algorithm, trial, "gif"), frame_delay)?;
        }

        controller.commit()?;
        Ok(())
    }
}

/// Output file for one run, e.g. `DIR/recursive_3.png`
pub fn output_path(dir: &Path, algorithm: FillAlgorithm, trial: usize, extension: &str) -> PathBuf {
    dir.join(format!(
        "{}_{trial}.{extension}",
        algorithm.name().to_lowercase()
    ))
}
