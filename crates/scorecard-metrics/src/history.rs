//! Historical observations
//!
//! One metric's benchmarking input: a trailing three-month average plus a
//! table of (baseline, actual) pairs from past comparable events. Rows with
//! a missing value are legal; they display but are excluded from aggregates.

use serde::{Deserialize, Serialize};

/// One past comparable event's observation for a metric
///
/// Baseline covers the 7 days before the event, actual the 7 days from the
/// event onward. Either span may be missing during interactive entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    /// Display name of the past event
    pub event_name: String,
    /// Baseline (7-day) value, if entered
    pub baseline: Option<f64>,
    /// Actual (7-day) value, if entered
    pub actual: Option<f64>,
}

impl HistoricalEvent {
    /// Create a fully-populated row
    #[inline]
    #[must_use]
    pub fn new(event_name: impl Into<String>, baseline: f64, actual: f64) -> Self {
        Self {
            event_name: event_name.into(),
            baseline: Some(baseline),
            actual: Some(actual),
        }
    }

    /// Create a row with possibly-missing values
    #[inline]
    #[must_use]
    pub fn partial(
        event_name: impl Into<String>,
        baseline: Option<f64>,
        actual: Option<f64>,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            baseline,
            actual,
        }
    }

    /// Both baseline and actual are present and finite
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(
            (self.baseline, self.actual),
            (Some(b), Some(a)) if b.is_finite() && a.is_finite()
        )
    }
}

/// Benchmarking input for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricHistoryInput {
    /// Trailing multi-period average for the recent trend
    pub three_month_avg: f64,
    /// Past comparable events, in entry order
    pub historical_events: Vec<HistoricalEvent>,
}

impl MetricHistoryInput {
    /// Input with no historical events (forces the trend-average fallback)
    #[inline]
    #[must_use]
    pub fn trend_only(three_month_avg: f64) -> Self {
        Self {
            three_month_avg,
            historical_events: Vec::new(),
        }
    }

    /// Input with a trend average and historical rows
    #[inline]
    #[must_use]
    pub fn new(three_month_avg: f64, historical_events: Vec<HistoricalEvent>) -> Self {
        Self {
            three_month_avg,
            historical_events,
        }
    }

    /// Rows usable for aggregate computation, in entry order
    pub fn complete_events(&self) -> impl Iterator<Item = &HistoricalEvent> {
        self.historical_events.iter().filter(|e| e.is_complete())
    }
}
