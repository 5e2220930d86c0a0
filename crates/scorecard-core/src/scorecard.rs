//! Scorecard tables
//!
//! A scorecard table holds one row per selected metric with editable Actuals
//! and Benchmark fields. `% Difference` is derived from the other two on
//! every read; it is never settable, never stored, and never stale.

use crate::error::ScorecardError;
use indexmap::IndexMap;
use scorecard_metrics::MetricName;
use serde::{Deserialize, Serialize};

/// Format an actuals/benchmark pair as a percentage-difference string
///
/// Returns `None` when either operand is missing or the benchmark is zero
/// (undefined, not zero, not infinity). One decimal place, e.g. `"12.3%"`.
/// Negative benchmarks take no special path; the sign follows the raw ratio
/// `(actuals - benchmark) / benchmark`.
#[must_use]
pub fn format_pct_difference(actuals: Option<f64>, benchmark: Option<f64>) -> Option<String> {
    let (a, b) = (actuals?, benchmark?);
    if b == 0.0 {
        return None;
    }
    Some(format!("{:.1}%", (a - b) / b * 100.0))
}

/// One editable scorecard row
///
/// `% Difference` is not a field: it is derived from the operands on every
/// read, so a pre-filled row reports it immediately and no serialized form
/// can carry a contradictory value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardRow {
    metric: MetricName,
    actuals: Option<f64>,
    benchmark: Option<f64>,
}

impl ScorecardRow {
    /// Row with the given pre-fills
    #[inline]
    #[must_use]
    pub(crate) fn new(
        metric: MetricName,
        actuals: Option<f64>,
        benchmark: Option<f64>,
    ) -> Self {
        Self {
            metric,
            actuals,
            benchmark,
        }
    }

    /// Metric this row measures
    #[inline]
    #[must_use]
    pub fn metric(&self) -> &MetricName {
        &self.metric
    }

    /// Current Actuals value
    #[inline]
    #[must_use]
    pub fn actuals(&self) -> Option<f64> {
        self.actuals
    }

    /// Current Benchmark value
    #[inline]
    #[must_use]
    pub fn benchmark(&self) -> Option<f64> {
        self.benchmark
    }

    /// Derived `% Difference`, `None` when undefined
    ///
    /// Computed fresh from the current operands on every call.
    #[inline]
    #[must_use]
    pub fn pct_difference(&self) -> Option<String> {
        format_pct_difference(self.actuals, self.benchmark)
    }

    /// Set Actuals; `% Difference` follows on the next read
    #[inline]
    pub fn set_actuals(&mut self, actuals: Option<f64>) {
        self.actuals = actuals;
    }

    /// Set Benchmark; `% Difference` follows on the next read
    #[inline]
    pub fn set_benchmark(&mut self, benchmark: Option<f64>) {
        self.benchmark = benchmark;
    }
}

/// Ordered scorecard table for one moment-in-progress
///
/// Row order is the metric selection order and is part of the observable
/// contract; tables are displayed and exported in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScorecardTable {
    rows: Vec<ScorecardRow>,
}

impl ScorecardTable {
    /// Rows in metric-selection order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[ScorecardRow] {
        &self.rows
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Metric names in row order
    pub fn metrics(&self) -> impl Iterator<Item = &MetricName> {
        self.rows.iter().map(ScorecardRow::metric)
    }

    /// Row for a metric, if the metric is in the table's set
    #[must_use]
    pub fn row(&self, metric: &MetricName) -> Option<&ScorecardRow> {
        self.rows.iter().find(|r| r.metric() == metric)
    }

    /// Set a row's Actuals
    pub fn set_actuals(
        &mut self,
        metric: &MetricName,
        actuals: Option<f64>,
    ) -> Result<(), ScorecardError> {
        self.row_mut(metric)?.set_actuals(actuals);
        Ok(())
    }

    /// Set a row's Benchmark
    pub fn set_benchmark(
        &mut self,
        metric: &MetricName,
        benchmark: Option<f64>,
    ) -> Result<(), ScorecardError> {
        self.row_mut(metric)?.set_benchmark(benchmark);
        Ok(())
    }

    fn row_mut(&mut self, metric: &MetricName) -> Result<&mut ScorecardRow, ScorecardError> {
        self.rows
            .iter_mut()
            .find(|r| r.metric() == metric)
            .ok_or_else(|| ScorecardError::UnknownMetric(metric.clone()))
    }
}

/// Build a scorecard table for the given metrics, in the given order
///
/// Benchmark and Actuals are pre-filled from the proposal maps when supplied
/// and containing the metric; otherwise left unset for manual entry. The
/// pre-fill is a suggestion only; both fields stay editable. No hidden state
/// is carried between calls: the same arguments always produce the same
/// table, which supports re-entering the scorecard step after clearing
/// prior work.
#[must_use]
pub fn assemble(
    metrics: &[MetricName],
    proposed_benchmarks: Option<&IndexMap<MetricName, f64>>,
    proposed_actuals: Option<&IndexMap<MetricName, f64>>,
) -> ScorecardTable {
    let rows = metrics
        .iter()
        .map(|metric| {
            let benchmark = proposed_benchmarks.and_then(|m| m.get(metric)).copied();
            let actuals = proposed_actuals.and_then(|m| m.get(metric)).copied();
            ScorecardRow::new(metric.clone(), actuals, benchmark)
        })
        .collect();
    ScorecardTable { rows }
}
