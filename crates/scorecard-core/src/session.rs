//! Session workflow
//!
//! Explicit, passed-in application state for the wizard layer. The wizard
//! owns and mutates a [`Session`]; the deriver and assembler stay pure
//! functions over slices of it. Stages and their legal transitions are
//! validated rather than implied by scattered flags.

use crate::error::SessionError;
use crate::moment::MomentBook;
use crate::scorecard::{assemble, ScorecardTable};
use indexmap::IndexMap;
use scorecard_bench::{derive, Derivation};
use scorecard_metrics::{MetricHistoryInput, MetricName};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Workflow stage of a scorecard session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Nothing derived or built yet
    NoData,
    /// Benchmark proposals derived (optional, skippable stage)
    BenchmarksDerived,
    /// A working scorecard table is open for edits
    ScorecardBuilding,
    /// At least one moment snapshot has been saved
    MomentSaved,
    /// Saved moments handed off for presentation building
    PresentationReady,
}

/// Stages legally reachable from `from`
#[must_use]
pub fn allowed_transitions(from: Stage) -> Vec<Stage> {
    use Stage::{BenchmarksDerived, MomentSaved, NoData, PresentationReady, ScorecardBuilding};
    match from {
        // Deriving is skippable: manual entry goes straight to building
        NoData => vec![BenchmarksDerived, ScorecardBuilding],
        BenchmarksDerived => vec![ScorecardBuilding],
        // Re-entering the building stage discards the current edits
        ScorecardBuilding => vec![ScorecardBuilding, MomentSaved],
        MomentSaved => vec![ScorecardBuilding, PresentationReady],
        PresentationReady => vec![ScorecardBuilding],
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::NoData
    }
}

/// Validate a stage transition
pub fn validate_transition(from: Stage, to: Stage) -> Result<(), SessionError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(SessionError::IllegalTransition { from, to })
    }
}

/// One scorecard-building session
///
/// Owns the global metric selection, the optional benchmark derivation, the
/// mutable working table, and the append-only moment book.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Session {
    metrics: Vec<MetricName>,
    derivation: Option<Derivation>,
    working: Option<ScorecardTable>,
    moments: MomentBook,
    stage: Stage,
}

impl Session {
    /// Fresh session with no metric selection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current workflow stage
    #[inline]
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Currently selected metric set, in selection order
    #[inline]
    #[must_use]
    pub fn metrics(&self) -> &[MetricName] {
        &self.metrics
    }

    /// Benchmark derivation output, if the derive step was taken
    #[inline]
    #[must_use]
    pub fn derivation(&self) -> Option<&Derivation> {
        self.derivation.as_ref()
    }

    /// Working scorecard table, if one is open
    #[inline]
    #[must_use]
    pub fn working(&self) -> Option<&ScorecardTable> {
        self.working.as_ref()
    }

    /// Saved moments
    #[inline]
    #[must_use]
    pub fn moments(&self) -> &MomentBook {
        &self.moments
    }

    /// Replace the metric selection
    ///
    /// Invalidates any derivation and working table built for the previous
    /// selection; every table's metric set must equal the selection at the
    /// time the table was built. Saved moments are untouched.
    pub fn select_metrics(&mut self, metrics: Vec<MetricName>) {
        self.metrics = metrics;
        self.derivation = None;
        self.working = None;
        self.transition_unchecked(Stage::NoData);
    }

    /// Run benchmark derivation over the collected history inputs
    pub fn derive_benchmarks(
        &mut self,
        inputs: &IndexMap<MetricName, MetricHistoryInput>,
    ) -> Result<&Derivation, SessionError> {
        self.transition(Stage::BenchmarksDerived)?;
        Ok(self.derivation.insert(derive(inputs)))
    }

    /// Open a working scorecard table for edits
    ///
    /// Pre-fills Benchmark and Actuals from the derivation when one exists;
    /// with no derivation the table is fully manual. Repeatable: re-entering
    /// this stage always yields a fresh assembly.
    pub fn begin_scorecard(&mut self) -> Result<&ScorecardTable, SessionError> {
        self.transition(Stage::ScorecardBuilding)?;
        let (benchmarks, actuals) = match &self.derivation {
            Some(d) => (Some(&d.proposed_benchmarks), Some(&d.proposed_actuals)),
            None => (None, None),
        };
        let table = assemble(&self.metrics, benchmarks, actuals);
        Ok(self.working.insert(table))
    }

    /// Edit the working table's Actuals for a metric
    pub fn set_actuals(
        &mut self,
        metric: &MetricName,
        actuals: Option<f64>,
    ) -> Result<(), SessionError> {
        self.working_mut()?.set_actuals(metric, actuals)?;
        Ok(())
    }

    /// Edit the working table's Benchmark for a metric
    pub fn set_benchmark(
        &mut self,
        metric: &MetricName,
        benchmark: Option<f64>,
    ) -> Result<(), SessionError> {
        self.working_mut()?.set_benchmark(metric, benchmark)?;
        Ok(())
    }

    /// Snapshot the working table as a named moment
    ///
    /// Copy, not move: the saved moment is a value-copy of the table, and the
    /// working table is reset to a fresh assembly so the next moment starts
    /// clean from the same metric set.
    pub fn save_moment(&mut self, name: impl Into<String>) -> Result<(), SessionError> {
        let table = self.working.as_ref().ok_or(SessionError::NoWorkingTable)?;
        let name = name.into();
        validate_transition(self.stage, Stage::MomentSaved)?;
        self.moments.save(name.clone(), table)?;
        self.transition_unchecked(Stage::MomentSaved);
        info!(moment = %name, total = self.moments.len(), "saved scorecard moment");

        let (benchmarks, actuals) = match &self.derivation {
            Some(d) => (Some(&d.proposed_benchmarks), Some(&d.proposed_actuals)),
            None => (None, None),
        };
        self.working = Some(assemble(&self.metrics, benchmarks, actuals));
        Ok(())
    }

    /// Hand the saved moments off for presentation building
    pub fn mark_presentation_ready(&mut self) -> Result<(), SessionError> {
        if self.moments.is_empty() {
            return Err(SessionError::NoMoments);
        }
        self.transition(Stage::PresentationReady)
    }

    /// Start over on a new scorecard while keeping saved moments
    pub fn reset_workflow(&mut self) {
        self.metrics.clear();
        self.derivation = None;
        self.working = None;
        self.transition_unchecked(Stage::NoData);
    }

    fn working_mut(&mut self) -> Result<&mut ScorecardTable, SessionError> {
        self.working.as_mut().ok_or(SessionError::NoWorkingTable)
    }

    fn transition(&mut self, to: Stage) -> Result<(), SessionError> {
        validate_transition(self.stage, to)?;
        self.transition_unchecked(to);
        Ok(())
    }

    fn transition_unchecked(&mut self, to: Stage) {
        if self.stage != to {
            info!(from = ?self.stage, to = ?to, "session stage transition");
        }
        self.stage = to;
    }
}
