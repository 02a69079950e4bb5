//! Session state machine tying generation, traversal and the trial ledger together
//!
//! In [`SessionState::Setup`] the grid parameters are editable and every edit
//! regenerates the preview grid. Starting a session freezes the preview as the
//! baseline, and from then on each run works on a private copy of it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::algorithm::{FillAlgorithm, FillEngine, Pacing, ProgressFn};
use crate::analysis::{PendingResult, TrialLedger, TrialRecord};
use crate::io::configuration::{SimulationConfig, validate_density, validate_dimension};
use crate::io::error::{Result, invalid_transition};
use crate::spatial::{CellState, Grid, generate_with_rng};

/// Phase of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Parameters editable, preview regenerates on change
    Setup,
    /// Parameters locked, baseline frozen, trials may run
    Active,
}

impl SessionState {
    const fn label(self) -> &'static str {
        match self {
            Self::Setup => "in setup",
            Self::Active => "active",
        }
    }
}

/// Owns the preview, the frozen baseline, the pending result and the ledger
pub struct SessionController {
    config: SimulationConfig,
    engine: FillEngine,
    rng: StdRng,
    state: SessionState,
    display: Grid,
    baseline: Option<Grid>,
    pending: Option<PendingResult>,
    ledger: TrialLedger,
    next_run_id: u64,
}

impl SessionController {
    /// Create a controller in setup with a freshly generated preview
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Self::from_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a controller whose grids are generated from a fixed seed
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self> {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: SimulationConfig, mut rng: StdRng) -> Result<Self> {
        config.validate()?;
        let engine = FillEngine::new(config.stack_size)?;
        let display = generate_with_rng(config.rows, config.cols, config.density, &mut rng)?;
        Ok(Self {
            config,
            engine,
            rng,
            state: SessionState::Setup,
            display,
            baseline: None,
            pending: None,
            ledger: TrialLedger::new(),
            next_run_id: 1,
        })
    }

    /// Current phase
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a session is active
    pub const fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active)
    }

    /// Current configuration
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Grid currently shown: the preview, the last run's working copy, or the baseline
    pub const fn grid(&self) -> &Grid {
        &self.display
    }

    /// Frozen baseline of the active session
    pub const fn baseline(&self) -> Option<&Grid> {
        self.baseline.as_ref()
    }

    /// Result of the last run if it has not been committed or discarded
    pub const fn pending(&self) -> Option<&PendingResult> {
        self.pending.as_ref()
    }

    /// Trials committed in the current or most recent session
    pub const fn ledger(&self) -> &TrialLedger {
        &self.ledger
    }

    /// Change the number of rows and regenerate the preview
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` while a session is active, or
    /// `InvalidParameter` for an out-of-range value
    pub fn set_rows(&mut self, rows: usize) -> Result<()> {
        self.require_setup("change rows")?;
        validate_dimension("rows", rows)?;
        self.config.rows = rows;
        self.regenerate_preview()
    }

    /// Change the number of columns and regenerate the preview
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` while a session is active, or
    /// `InvalidParameter` for an out-of-range value
    pub fn set_cols(&mut self, cols: usize) -> Result<()> {
        self.require_setup("change cols")?;
        validate_dimension("cols", cols)?;
        self.config.cols = cols;
        self.regenerate_preview()
    }

    /// Change the obstacle density and regenerate the preview
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` while a session is active, or
    /// `InvalidParameter` for a density outside `[0, 1]`
    pub fn set_density(&mut self, density: f64) -> Result<()> {
        self.require_setup("change density")?;
        validate_density(density)?;
        self.config.density = density;
        self.regenerate_preview()
    }

    /// Change the pause between visited cells; allowed in either phase
    pub const fn set_step_delay_ms(&mut self, step_delay_ms: u64) {
        self.config.step_delay_ms = step_delay_ms;
    }

    /// Generate a new preview with the current parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` while a session is active
    pub fn regenerate(&mut self) -> Result<()> {
        self.require_setup("regenerate the grid")?;
        self.regenerate_preview()
    }

    /// Freeze the preview as the baseline and start a new session
    ///
    /// Clears the ledger and any pending result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if a session is already active
    pub fn start_session(&mut self) -> Result<&Grid> {
        self.require_setup("start a session")?;
        self.ledger.reset();
        self.pending = None;
        self.state = SessionState::Active;
        info!(
            grid = %self.display.dimensions_label(),
            walls = self.display.count(CellState::Wall),
            "session started"
        );
        let baseline: &Grid = self.baseline.insert(self.display.clone());
        Ok(baseline)
    }

    /// End the active session and show a fresh copy of the baseline
    ///
    /// The pending result is discarded; the ledger stays readable until the
    /// next session starts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if no session is active
    pub fn end_session(&mut self) -> Result<Grid> {
        self.require_active("end a session")?;
        self.pending = None;
        self.state = SessionState::Setup;
        if let Some(baseline) = &self.baseline {
            self.display = baseline.clone();
        }
        info!(trials = self.ledger.len(), "session ended");
        Ok(self.display.clone())
    }

    /// Run one algorithm on a private copy of the baseline
    ///
    /// The working copy becomes the displayed grid and the result replaces any
    /// uncommitted one. `observer` is only called when the configured step
    /// delay is positive.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if no session is active, `MalformedGrid` if
    /// the baseline does not match the configured dimensions, or
    /// `WorkerFailure` if the recursive worker fails
    pub fn run(
        &mut self,
        algorithm: FillAlgorithm,
        observer: Option<&mut ProgressFn<'_>>,
    ) -> Result<&PendingResult> {
        self.require_active("run a fill")?;
        self.pending = None;

        let mut working = self.working_copy()?;
        self.display = working.clone();
        let report = self.engine.run(
            algorithm,
            &mut working,
            Pacing::from_millis(self.config.step_delay_ms),
            observer,
        )?;

        let id = self.next_run_id;
        self.next_run_id += 1;
        let pending = PendingResult::from_report(id, &report, working.dimensions_label());
        debug!(id, algorithm = %algorithm, outcome = %report.outcome, "run captured");
        self.display = working;
        let pending: &PendingResult = self.pending.insert(pending);
        Ok(pending)
    }

    /// Commit the pending result to the ledger
    ///
    /// Afterwards the displayed grid is reset to the baseline.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if there is no pending result
    pub fn commit(&mut self) -> Result<TrialRecord> {
        let Some(pending) = self.pending.take() else {
            let state = if self.is_active() {
                "awaiting a run"
            } else {
                self.state.label()
            };
            return Err(invalid_transition("commit a result", state));
        };
        let record = self.ledger.commit(pending);
        if let Some(baseline) = &self.baseline {
            self.display = baseline.clone();
        }
        info!(
            id = record.id,
            algorithm = %record.algorithm,
            trial = record.trial_number,
            outcome = %record.outcome,
            elapsed_ms = record.elapsed_ms,
            "trial committed"
        );
        Ok(record)
    }

    /// Drop the pending result without recording it
    pub const fn discard_pending(&mut self) -> Option<PendingResult> {
        self.pending.take()
    }

    fn working_copy(&self) -> Result<Grid> {
        let Some(baseline) = self.baseline.as_ref() else {
            return Err(invalid_transition("run a fill", "missing its baseline"));
        };
        baseline.ensure_dimensions(self.config.rows, self.config.cols)?;
        Ok(baseline.clone())
    }

    fn regenerate_preview(&mut self) -> Result<()> {
        self.display = generate_preview(&self.config, &mut self.rng)?;
        Ok(())
    }

    fn require_setup(&self, operation: &'static str) -> Result<()> {
        match self.state {
            SessionState::Setup => Ok(()),
            SessionState::Active => Err(invalid_transition(operation, self.state.label())),
        }
    }

    fn require_active(&self, operation: &'static str) -> Result<()> {
        match self.state {
            SessionState::Active => Ok(()),
            SessionState::Setup => Err(invalid_transition(operation, self.state.label())),
        }
    }
}

fn generate_preview<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Result<Grid> {
    generate_with_rng(config.rows, config.cols, config.density, rng)
}
