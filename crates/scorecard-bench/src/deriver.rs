//! Benchmark derivation
//!
//! Per metric, independently:
//! 1. Keep only historical rows with both baseline and actual present.
//! 2. With no usable rows, fall back to the trailing average for both
//!    proposals (no historical signal means trust the recent trend).
//! 3. Otherwise the proposed benchmark is the trailing average scaled by the
//!    observed lift ratio `mean(actual) / mean(baseline)`, and the proposed
//!    actual is `mean(actual)` itself.
//!
//! Negative, zero, and missing values are all legal. A zero mean baseline
//! yields a lift of 1, never an error. No rounding is applied here;
//! formatting belongs to callers.

use crate::summary::BenchmarkSummaryRow;
use indexmap::IndexMap;
use scorecard_metrics::{MetricHistoryInput, MetricName};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Output of a benchmark derivation run
///
/// Metric order in all three collections follows the input map's iteration
/// order. Sorting, if wanted, is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Derivation {
    /// One audit row per input metric
    pub summary: Vec<BenchmarkSummaryRow>,
    /// Proposed benchmark per metric
    pub proposed_benchmarks: IndexMap<MetricName, f64>,
    /// Proposed typical actual per metric
    pub proposed_actuals: IndexMap<MetricName, f64>,
}

impl Derivation {
    /// Derivation over zero metrics
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            summary: Vec::new(),
            proposed_benchmarks: IndexMap::new(),
            proposed_actuals: IndexMap::new(),
        }
    }
}

/// Derive proposed benchmarks for every metric in `inputs`
///
/// Each metric is processed independently; one summary row is emitted per
/// metric regardless of whether the fallback path was taken.
#[must_use]
pub fn derive(inputs: &IndexMap<MetricName, MetricHistoryInput>) -> Derivation {
    let mut summary = Vec::with_capacity(inputs.len());
    let mut proposed_benchmarks = IndexMap::with_capacity(inputs.len());
    let mut proposed_actuals = IndexMap::with_capacity(inputs.len());

    for (metric, input) in inputs {
        let row = derive_metric(metric, input);
        debug!(
            metric = %row.metric,
            proposed_benchmark = row.proposed_benchmark,
            proposed_actual = row.proposed_actual,
            n_events_used = row.n_events_used,
            "derived benchmark"
        );
        proposed_benchmarks.insert(metric.clone(), row.proposed_benchmark);
        proposed_actuals.insert(metric.clone(), row.proposed_actual);
        summary.push(row);
    }

    Derivation {
        summary,
        proposed_benchmarks,
        proposed_actuals,
    }
}

fn derive_metric(metric: &MetricName, input: &MetricHistoryInput) -> BenchmarkSummaryRow {
    let mut baseline_sum = 0.0;
    let mut actual_sum = 0.0;
    let mut n = 0usize;

    for event in input.complete_events() {
        // is_complete guarantees both values are present and finite
        baseline_sum += event.baseline.unwrap_or_default();
        actual_sum += event.actual.unwrap_or_default();
        n += 1;
    }

    if n == 0 {
        // No historical signal: the trend average stands in for both fields.
        return BenchmarkSummaryRow {
            metric: metric.clone(),
            three_month_avg: input.three_month_avg,
            proposed_benchmark: input.three_month_avg,
            proposed_actual: input.three_month_avg,
            n_events_used: 0,
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let count = n as f64;
    let average_actual = actual_sum / count;
    let average_baseline = baseline_sum / count;

    let lift_ratio = if average_baseline == 0.0 {
        1.0
    } else {
        average_actual / average_baseline
    };

    BenchmarkSummaryRow {
        metric: metric.clone(),
        three_month_avg: input.three_month_avg,
        proposed_benchmark: input.three_month_avg * lift_ratio,
        proposed_actual: average_actual,
        n_events_used: n,
    }
}
