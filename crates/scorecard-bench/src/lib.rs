//! Scorecard Bench - benchmark derivation
//!
//! Turns per-metric historical observations into one proposed benchmark and
//! one proposed "typical actual" per metric, with an auditable summary row
//! recording how each number was derived.
//!
//! # Example
//!
//! ```rust
//! use indexmap::IndexMap;
//! use scorecard_bench::derive;
//! use scorecard_metrics::{HistoricalEvent, MetricHistoryInput, MetricName};
//!
//! let mut inputs = IndexMap::new();
//! inputs.insert(
//!     MetricName::from("Views"),
//!     MetricHistoryInput::new(50.0, vec![
//!         HistoricalEvent::new("Launch A", 100.0, 110.0),
//!         HistoricalEvent::new("Launch B", 200.0, 190.0),
//!     ]),
//! );
//!
//! let derivation = derive(&inputs);
//! assert_eq!(derivation.proposed_benchmarks[&MetricName::from("Views")], 50.0);
//! ```

#![warn(unreachable_pub)]

pub mod deriver;
pub mod summary;

pub use deriver::{derive, Derivation};
pub use summary::BenchmarkSummaryRow;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
