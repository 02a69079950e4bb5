//! Ordered record of committed trials for one session

use std::cmp::Ordering;

use crate::algorithm::{FillAlgorithm, Outcome, RunReport};
use crate::analysis::statistics::{self, KindSummary, PairedSeries};

/// Result of a finished run that has not been committed yet
#[derive(Debug, Clone, PartialEq)]
pub struct PendingResult {
    /// Unique, monotonically increasing run identity
    pub id: u64,
    /// Strategy that ran
    pub algorithm: FillAlgorithm,
    /// Traversal time in milliseconds
    pub elapsed_ms: f64,
    /// How the run ended
    pub outcome: Outcome,
    /// Dimensions of the grid the run used, e.g. `25x25`
    pub grid_label: String,
    /// Cells marked before the run ended
    pub cells_filled: usize,
}

impl PendingResult {
    /// Wrap an engine report with its identity and grid label
    pub fn from_report(id: u64, report: &RunReport, grid_label: String) -> Self {
        Self {
            id,
            algorithm: report.algorithm,
            elapsed_ms: report.elapsed_ms(),
            outcome: report.outcome,
            grid_label,
            cells_filled: report.cells_filled,
        }
    }
}

/// A committed run with its per-algorithm trial number
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    /// Unique, monotonically increasing run identity
    pub id: u64,
    /// Strategy that ran
    pub algorithm: FillAlgorithm,
    /// Traversal time in milliseconds
    pub elapsed_ms: f64,
    /// How the run ended
    pub outcome: Outcome,
    /// Dimensions of the grid the run used, e.g. `25x25`
    pub grid_label: String,
    /// Cells marked before the run ended
    pub cells_filled: usize,
    /// 1-based position among records of the same algorithm
    pub trial_number: usize,
}

impl TrialRecord {
    /// Whether the run ended without exhausting its stack
    pub fn succeeded(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Append-only list of trial records
///
/// Records are never edited or removed individually; [`TrialLedger::reset`]
/// clears the whole ledger when a new session starts.
#[derive(Debug, Clone, Default)]
pub struct TrialLedger {
    records: Vec<TrialRecord>,
}

impl TrialLedger {
    /// Create an empty ledger
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Promote a pending result to a record and append it
    ///
    /// The trial number is one more than the number of records already held
    /// for the same algorithm.
    pub fn commit(&mut self, pending: PendingResult) -> TrialRecord {
        let trial_number = self.count(pending.algorithm) + 1;
        let record = TrialRecord {
            id: pending.id,
            algorithm: pending.algorithm,
            elapsed_ms: pending.elapsed_ms,
            outcome: pending.outcome,
            grid_label: pending.grid_label,
            cells_filled: pending.cells_filled,
            trial_number,
        };
        self.records.push(record.clone());
        record
    }

    /// Remove every record
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Records in commit order
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    /// Number of records
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record has been committed
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records for one algorithm, crashes included
    pub fn count(&self, algorithm: FillAlgorithm) -> usize {
        self.records
            .iter()
            .filter(|record| record.algorithm == algorithm)
            .count()
    }

    /// Mean elapsed time of successful runs of one algorithm, `0` if there are none
    pub fn average(&self, algorithm: FillAlgorithm) -> f64 {
        statistics::average(&self.records, algorithm)
    }

    /// Per-trial-number series of both algorithms for side-by-side comparison
    pub fn paired_series(&self) -> PairedSeries {
        statistics::paired_series(&self.records)
    }

    /// Counts and timing summary for one algorithm
    pub fn summary(&self, algorithm: FillAlgorithm) -> KindSummary {
        statistics::summarize(&self.records, algorithm)
    }

    /// Records ordered by trial number, recursive before iterative on ties
    pub fn sorted_view(&self) -> Vec<&TrialRecord> {
        let mut view: Vec<&TrialRecord> = self.records.iter().collect();
        view.sort_by(|a, b| compare_for_report(a, b));
        view
    }
}

fn compare_for_report(a: &TrialRecord, b: &TrialRecord) -> Ordering {
    a.trial_number
        .cmp(&b.trial_number)
        .then_with(|| a.algorithm.cmp(&b.algorithm))
}
