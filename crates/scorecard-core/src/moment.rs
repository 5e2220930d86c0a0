//! Saved scorecard moments
//!
//! A moment is an immutable snapshot of an edited scorecard table under a
//! unique, non-empty name ("Pre-Reveal", "Launch Week"). Saving copies the
//! table by value; later edits to the working table can never retroactively
//! alter a saved moment. The book is append-only.

use crate::error::MomentError;
use crate::scorecard::ScorecardTable;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One saved scorecard snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    name: String,
    table: ScorecardTable,
}

impl Moment {
    /// Moment name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshotted table
    #[inline]
    #[must_use]
    pub fn table(&self) -> &ScorecardTable {
        &self.table
    }
}

/// Append-only collection of saved moments, in save order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MomentBook {
    moments: IndexMap<String, Moment>,
}

impl MomentBook {
    /// Empty book
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a snapshot of `table` under `name`
    ///
    /// The table is copied by value. Names must be non-empty and unique;
    /// moments are never overwritten or auto-created.
    pub fn save(&mut self, name: impl Into<String>, table: &ScorecardTable) -> Result<(), MomentError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MomentError::EmptyName);
        }
        if self.moments.contains_key(&name) {
            return Err(MomentError::DuplicateName(name));
        }
        let moment = Moment {
            name: name.clone(),
            table: table.clone(),
        };
        self.moments.insert(name, moment);
        Ok(())
    }

    /// Saved moment by name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Moment> {
        self.moments.get(name)
    }

    /// Moment names in save order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.moments.keys().map(String::as_str)
    }

    /// Moments in save order
    pub fn iter(&self) -> impl Iterator<Item = &Moment> {
        self.moments.values()
    }

    /// Number of saved moments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.moments.len()
    }

    /// Whether no moments are saved
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }
}
