//! Error types for Scorecard Core
//!
//! Numeric edge cases (missing values, zero benchmarks, zero baselines) are
//! never errors anywhere in the engine; they resolve to well-defined
//! fallbacks. Errors here mark caller-contract violations only.

use crate::session::Stage;
use scorecard_metrics::MetricName;

/// Errors from scorecard table edits
#[derive(Debug, thiserror::Error)]
pub enum ScorecardError {
    /// Row edit targeted a metric outside the table's metric set
    #[error("unknown metric: {0}")]
    UnknownMetric(MetricName),
}

/// Errors from moment snapshots
#[derive(Debug, thiserror::Error)]
pub enum MomentError {
    /// Moment names must be non-empty
    #[error("moment name is empty")]
    EmptyName,

    /// Moment names must be unique; moments are never overwritten
    #[error("moment already saved: {0}")]
    DuplicateName(String),
}

/// Errors from the session workflow
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Workflow stage transition not allowed
    #[error("illegal transition: {from:?} -> {to:?}")]
    IllegalTransition {
        /// Stage the session was in
        from: Stage,
        /// Stage that was requested
        to: Stage,
    },

    /// Operation needs a working scorecard table and none is open
    #[error("no working scorecard table")]
    NoWorkingTable,

    /// At least one saved moment is required
    #[error("no moments saved")]
    NoMoments,

    /// Table edit failed
    #[error(transparent)]
    Scorecard(#[from] ScorecardError),

    /// Moment save failed
    #[error(transparent)]
    Moment(#[from] MomentError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ScorecardError::UnknownMetric(MetricName::from("Ghost"));
        assert_eq!(err.to_string(), "unknown metric: Ghost");

        let err = MomentError::DuplicateName("Launch Week".to_string());
        assert!(err.to_string().contains("Launch Week"));
    }

    #[test]
    fn session_error_wraps_sources() {
        let err: SessionError = MomentError::EmptyName.into();
        assert!(matches!(err, SessionError::Moment(MomentError::EmptyName)));
    }
}
