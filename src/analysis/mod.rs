//! Trial bookkeeping and aggregation

/// Ordered record of committed trials
pub mod ledger;
/// Averages, summaries and paired series over trial records
pub mod statistics;

pub use ledger::{PendingResult, TrialLedger, TrialRecord};
pub use statistics::{KindSummary, PairedSeries};
