//! Scorecard Core - table assembly, moments, and session workflow
//!
//! The central crate of the scorecard engine:
//! - Assembles editable scorecard tables (Metric, Actuals, Benchmark,
//!   % Difference) from a metric selection and optional pre-fill proposals
//! - Keeps `% Difference` derived, never independently settable
//! - Snapshots edited tables into immutable named "moments"
//! - Drives the wizard-facing session state machine
//!
//! # Example
//!
//! ```rust
//! use scorecard_core::{assemble, Session};
//! use scorecard_metrics::MetricName;
//!
//! let metrics = vec![MetricName::from("Views"), MetricName::from("DAU")];
//! let mut table = assemble(&metrics, None, None);
//! table.set_actuals(&metrics[0], Some(120.0)).unwrap();
//! table.set_benchmark(&metrics[0], Some(100.0)).unwrap();
//! assert_eq!(table.row(&metrics[0]).unwrap().pct_difference().as_deref(), Some("20.0%"));
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod moment;
pub mod scorecard;
pub mod session;

pub use error::{MomentError, ScorecardError, SessionError};
pub use moment::{Moment, MomentBook};
pub use scorecard::{assemble, format_pct_difference, ScorecardRow, ScorecardTable};
pub use session::{Session, Stage};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
