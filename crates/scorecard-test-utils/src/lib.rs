//! Testing utilities for the scorecard workspace
//!
//! Fixture builders for history inputs plus a tracing init helper so test
//! runs can opt into log output with `RUST_LOG`.

#![warn(unreachable_pub)]

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use scorecard_metrics::{HistoricalEvent, MetricHistoryInput, MetricName};
use tracing_subscriber::EnvFilter;

static TRACING: OnceCell<()> = OnceCell::new();

/// Initialize tracing once per test process, honoring `RUST_LOG`
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Metric names from string literals
#[must_use]
pub fn metric_names(names: &[&str]) -> Vec<MetricName> {
    names.iter().copied().map(MetricName::from).collect()
}

/// History input from complete (baseline, actual) pairs
#[must_use]
pub fn history(three_month_avg: f64, pairs: &[(f64, f64)]) -> MetricHistoryInput {
    let events = pairs
        .iter()
        .enumerate()
        .map(|(i, (baseline, actual))| {
            HistoricalEvent::new(format!("Event {}", i + 1), *baseline, *actual)
        })
        .collect();
    MetricHistoryInput::new(three_month_avg, events)
}

/// Derive inputs keyed by metric name, preserving the given order
#[must_use]
pub fn history_inputs(
    entries: Vec<(&str, MetricHistoryInput)>,
) -> IndexMap<MetricName, MetricHistoryInput> {
    entries
        .into_iter()
        .map(|(name, input)| (MetricName::from(name), input))
        .collect()
}
