//! Metric categories
//!
//! Each metric belongs to a scorecard category (Reach, Depth, Engagement).
//! Metrics outside the built-in registry fall back to Uncategorized.

use crate::metric::MetricName;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scorecard category of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricCategory {
    /// Audience size: impressions, views, article counts
    Reach,
    /// Quality of attention: sentiment, open rates, % viewed
    Depth,
    /// Concrete actions: sign-ups, sessions, hours watched
    Engagement,
    /// Not in the registry
    Uncategorized,
}

impl MetricCategory {
    /// Display label used in scorecard tables
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MetricCategory::Reach => "Reach",
            MetricCategory::Depth => "Depth",
            MetricCategory::Engagement => "Engagement",
            MetricCategory::Uncategorized => "Uncategorized",
        }
    }
}

impl std::fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Registry mapping metric names to their category
///
/// Insertion order is preserved so registry listings are stable. Extendable
/// at runtime; lookups for unregistered metrics return Uncategorized rather
/// than failing, since the metric vocabulary is open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRegistry {
    entries: IndexMap<MetricName, MetricCategory>,
}

impl CategoryRegistry {
    /// Empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Registry pre-loaded with the built-in metric/category pairs
    #[must_use]
    pub fn builtin() -> Self {
        use MetricCategory::{Depth, Engagement, Reach};
        let pairs: [(&str, MetricCategory); 19] = [
            // Reach
            ("Social Conversation Volume", Reach),
            ("Video Views (VOD)", Reach),
            ("Views trailer", Reach),
            ("UGC Views", Reach),
            ("Social Impressions-Posts with trailer (FB, IG, X)", Reach),
            ("Social Impressions-All posts", Reach),
            ("Nb. press articles", Reach),
            // Depth
            ("Press UMV (unique monthly views)", Depth),
            ("Social Sentiment (Franchise)", Depth),
            ("Trailer avg % viewed (Youtube)", Depth),
            ("Email Open Rate (OR)", Depth),
            ("Email Click Through Rate (CTR)", Depth),
            // Engagement / Action
            ("Labs program sign-ups", Engagement),
            ("Discord channel sign-ups", Engagement),
            ("% Trailer views from Discord (Youtube)", Engagement),
            ("Labs sign up click-through Web", Engagement),
            ("Sessions", Engagement),
            ("DAU", Engagement),
            ("Hours Watched (Streams)", Engagement),
        ];

        let entries = pairs
            .into_iter()
            .map(|(name, cat)| (MetricName::from(name), cat))
            .collect();
        Self { entries }
    }

    /// Register or reassign a metric's category
    #[inline]
    pub fn insert(&mut self, metric: MetricName, category: MetricCategory) {
        self.entries.insert(metric, category);
    }

    /// Category of a metric, defaulting to Uncategorized
    #[inline]
    #[must_use]
    pub fn category_for(&self, metric: &MetricName) -> MetricCategory {
        self.entries
            .get(metric)
            .copied()
            .unwrap_or(MetricCategory::Uncategorized)
    }

    /// Number of registered metrics
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate registered pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&MetricName, MetricCategory)> {
        self.entries.iter().map(|(m, c)| (m, *c))
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Collapse repeated category labels in a contiguous run.
///
/// Display helper for grouped tables: the first row of each run keeps its
/// label, subsequent rows of the same category show an empty label.
#[must_use]
pub fn collapse_category_labels(categories: &[MetricCategory]) -> Vec<String> {
    let mut labels = Vec::with_capacity(categories.len());
    let mut prev: Option<MetricCategory> = None;
    for cat in categories {
        if prev == Some(*cat) {
            labels.push(String::new());
        } else {
            labels.push(cat.label().to_string());
        }
        prev = Some(*cat);
    }
    labels
}
