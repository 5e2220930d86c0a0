//! Scorecard Metrics - metric vocabulary and history inputs
//!
//! Foundation types shared by the benchmark deriver and the scorecard
//! assembler:
//! - Metric names (open vocabulary, user-extensible)
//! - Metric categories and the built-in category registry
//! - Historical baseline/actual observations per metric

#![warn(unreachable_pub)]

pub mod category;
pub mod history;
pub mod metric;

pub use category::{collapse_category_labels, CategoryRegistry, MetricCategory};
pub use history::{HistoricalEvent, MetricHistoryInput};
pub use metric::{default_metric_catalog, MetricName};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
