//! Plain-text rendering of the trial ledger

use std::fmt;

use crate::algorithm::{FillAlgorithm, Outcome};
use crate::analysis::{KindSummary, TrialLedger, TrialRecord};

/// Averages, the sorted trial table and the paired series of one ledger
pub struct LedgerReport<'a> {
    ledger: &'a TrialLedger,
}

impl<'a> LedgerReport<'a> {
    /// Report over a ledger
    pub const fn new(ledger: &'a TrialLedger) -> Self {
        Self { ledger }
    }

    fn write_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<7}{:<11}{:>10}", "Trial", "Algo", "Time")?;
        for record in self.ledger.sorted_view() {
            writeln!(
                f,
                "{:<7}{:<11}{:>10}",
                format!("#{}", record.trial_number),
                record.algorithm.name(),
                time_cell(record)
            )?;
        }
        Ok(())
    }

    fn write_series(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let series = self.ledger.paired_series();
        write!(f, "{:<11}", "Series")?;
        for label in series.labels() {
            write!(f, "{label:>9}")?;
        }
        writeln!(f)?;
        for algorithm in FillAlgorithm::ALL {
            write!(f, "{:<11}", algorithm.name())?;
            for point in series.for_algorithm(algorithm) {
                match point {
                    Some(ms) => write!(f, "{ms:>9.2}")?,
                    None => write!(f, "{:>9}", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for LedgerReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Performance report ({} points)", self.ledger.len())?;
        for algorithm in FillAlgorithm::ALL {
            writeln!(
                f,
                "  {}",
                SummaryLine::new(algorithm, &self.ledger.summary(algorithm))
            )?;
        }
        writeln!(f)?;

        if self.ledger.is_empty() {
            return writeln!(f, "No data recorded yet");
        }

        self.write_table(f)?;
        writeln!(f)?;
        self.write_series(f)
    }
}

/// One-line average summary of an algorithm, e.g. `Avg Recursive: 1.25ms (2 trials)`
pub struct SummaryLine<'a> {
    algorithm: FillAlgorithm,
    summary: &'a KindSummary,
}

impl<'a> SummaryLine<'a> {
    /// Summary line for one algorithm
    pub const fn new(algorithm: FillAlgorithm, summary: &'a KindSummary) -> Self {
        Self { algorithm, summary }
    }
}

impl fmt::Display for SummaryLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Avg {}: {:.2}ms ({} trials",
            self.algorithm.name(),
            self.summary.average_ms,
            self.summary.trials
        )?;
        if self.summary.crashes > 0 {
            write!(f, ", {} crashed", self.summary.crashes)?;
        }
        write!(f, ")")
    }
}

/// Render averages, the sorted trial table and the paired series
pub fn render_report(ledger: &TrialLedger) -> String {
    LedgerReport::new(ledger).to_string()
}

/// One-line average summary of an algorithm
pub fn summary_line(algorithm: FillAlgorithm, summary: &KindSummary) -> String {
    SummaryLine::new(algorithm, summary).to_string()
}

fn time_cell(record: &TrialRecord) -> String {
    match record.outcome {
        Outcome::Success => format!("{:.1}ms", record.elapsed_ms),
        Outcome::Crash => "CRASH".to_string(),
    }
}
