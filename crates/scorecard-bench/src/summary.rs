//! Benchmark derivation audit rows

use scorecard_metrics::MetricName;
use serde::{Deserialize, Serialize};

/// Audit trail of how one metric's benchmark was derived
///
/// `n_events_used == 0` means no historical signal existed and both proposed
/// values fell back to the trailing average. Callers must treat that as a
/// distinct, observable case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSummaryRow {
    /// Metric this row describes
    pub metric: MetricName,
    /// Trailing multi-period average supplied as input
    pub three_month_avg: f64,
    /// Derived benchmark proposal
    pub proposed_benchmark: f64,
    /// Derived typical-actual proposal
    pub proposed_actual: f64,
    /// Count of historical rows with both values present
    pub n_events_used: usize,
}

impl BenchmarkSummaryRow {
    /// Whether this row came from the no-signal fallback path
    #[inline]
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.n_events_used == 0
    }
}
