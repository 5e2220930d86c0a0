//! Metric names
//!
//! A metric is identified by its display name. Membership in the selected
//! metric set is what matters; there is no closed enum of metrics, so users
//! can measure anything that produces a number.

use serde::{Deserialize, Serialize};

/// Unique name of a measurable quantity (e.g. "Social Impressions")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricName(String);

impl MetricName {
    /// Create a metric name
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MetricName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MetricName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Built-in catalog of selectable metrics
///
/// The vocabulary is open; this list only seeds the selection UI.
#[must_use]
pub fn default_metric_catalog() -> Vec<MetricName> {
    [
        "Sessions",
        "DAU",
        "Revenue",
        "Installs",
        "Retention",
        "Watch Time",
        "ARPU",
        "Conversions",
        "Video Views (VOD)",
        "Hours Watched (Streams)",
        "Social Mentions",
        "Search Index",
        "Broadcast TWT",
        "PCCV",
        "AMA",
    ]
    .into_iter()
    .map(MetricName::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_name_display() {
        let m = MetricName::new("Social Impressions");
        assert_eq!(m.to_string(), "Social Impressions");
        assert_eq!(m.as_str(), "Social Impressions");
    }

    #[test]
    fn metric_name_serde_is_transparent() {
        let m = MetricName::new("DAU");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"DAU\"");
        let back: MetricName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn catalog_is_nonempty_and_unique() {
        let catalog = default_metric_catalog();
        assert!(!catalog.is_empty());
        let mut seen = std::collections::HashSet::new();
        for m in &catalog {
            assert!(seen.insert(m.clone()), "duplicate catalog entry: {m}");
        }
    }
}
