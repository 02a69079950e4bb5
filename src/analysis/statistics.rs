//! Aggregates over trial records: averages, summaries and paired chart series

use crate::algorithm::{FillAlgorithm, Outcome};
use crate::analysis::ledger::TrialRecord;

/// Trial-number aligned values of both algorithms
///
/// Index `i` holds trial number `i + 1`. `None` means that algorithm has no
/// trial with that number; a crashed trial is `Some(0.0)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PairedSeries {
    /// Elapsed milliseconds of recursive trials
    pub recursive: Vec<Option<f64>>,
    /// Elapsed milliseconds of iterative trials
    pub iterative: Vec<Option<f64>>,
}

impl PairedSeries {
    /// Number of trial slots in each series
    pub const fn len(&self) -> usize {
        self.recursive.len()
    }

    /// Whether there are no trial slots
    pub const fn is_empty(&self) -> bool {
        self.recursive.is_empty()
    }

    /// Series of one algorithm
    pub fn for_algorithm(&self, algorithm: FillAlgorithm) -> &[Option<f64>] {
        match algorithm {
            FillAlgorithm::Recursive => &self.recursive,
            FillAlgorithm::Iterative => &self.iterative,
        }
    }

    /// Axis labels `Test 1..=n`
    pub fn labels(&self) -> Vec<String> {
        (1..=self.len()).map(|n| format!("Test {n}")).collect()
    }
}

/// Counts and timings of one algorithm's trials
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KindSummary {
    /// All trials, crashes included
    pub trials: usize,
    /// Trials that succeeded
    pub successes: usize,
    /// Trials that exhausted their stack
    pub crashes: usize,
    /// Mean elapsed milliseconds over successful trials, `0` if none
    pub average_ms: f64,
    /// Fastest successful trial
    pub fastest_ms: Option<f64>,
    /// Slowest successful trial
    pub slowest_ms: Option<f64>,
}

/// Mean elapsed time of successful records of one algorithm
///
/// Crashed records are excluded; returns `0` when nothing qualifies.
pub fn average(records: &[TrialRecord], algorithm: FillAlgorithm) -> f64 {
    let (sum, count) = successful_times(records, algorithm)
        .fold((0.0, 0usize), |(sum, count), ms| (sum + ms, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Build trial-number aligned series for both algorithms
pub fn paired_series(records: &[TrialRecord]) -> PairedSeries {
    let slots = FillAlgorithm::ALL
        .iter()
        .map(|&algorithm| count(records, algorithm))
        .max()
        .unwrap_or(0);

    PairedSeries {
        recursive: series(records, FillAlgorithm::Recursive, slots),
        iterative: series(records, FillAlgorithm::Iterative, slots),
    }
}

/// Summarize one algorithm's records
pub fn summarize(records: &[TrialRecord], algorithm: FillAlgorithm) -> KindSummary {
    let trials = count(records, algorithm);
    let successes = successful_times(records, algorithm).count();
    let fastest_ms = successful_times(records, algorithm).reduce(f64::min);
    let slowest_ms = successful_times(records, algorithm).reduce(f64::max);

    KindSummary {
        trials,
        successes,
        crashes: trials - successes,
        average_ms: average(records, algorithm),
        fastest_ms,
        slowest_ms,
    }
}

fn count(records: &[TrialRecord], algorithm: FillAlgorithm) -> usize {
    records
        .iter()
        .filter(|record| record.algorithm == algorithm)
        .count()
}

fn successful_times(
    records: &[TrialRecord],
    algorithm: FillAlgorithm,
) -> impl Iterator<Item = f64> + '_ {
    records
        .iter()
        .filter(move |record| record.algorithm == algorithm && record.outcome == Outcome::Success)
        .map(|record| record.elapsed_ms)
}

fn series(records: &[TrialRecord], algorithm: FillAlgorithm, slots: usize) -> Vec<Option<f64>> {
    (1..=slots)
        .map(|trial_number| {
            records
                .iter()
                .find(|record| record.algorithm == algorithm && record.trial_number == trial_number)
                .map(|record| match record.outcome {
                    Outcome::Success => record.elapsed_ms,
                    Outcome::Crash => 0.0,
                })
        })
        .collect()
}
