//! Workbook descriptors
//!
//! Sheet-level description of the exported workbook: one sheet per saved
//! moment plus an optional benchmark-summary sheet. Writing the actual file
//! is the workbook collaborator's job.

use scorecard_bench::BenchmarkSummaryRow;
use scorecard_core::{MomentBook, ScorecardTable};
use serde::{Deserialize, Serialize};

/// Spreadsheet engines cap sheet names at 31 characters
const MAX_SHEET_NAME: usize = 31;
/// Event names are cut shorter so the region suffix always fits
const MAX_EVENT_NAME: usize = 25;

/// Truncate a sheet name to the engine limit
#[must_use]
pub fn sheet_name(name: &str) -> String {
    name.chars().take(MAX_SHEET_NAME).collect()
}

/// Sheet name for an (event, region) pair, e.g. `"Launch_US"`
#[must_use]
pub fn event_sheet_name(event: &str, region: &str) -> String {
    let event: String = event.chars().take(MAX_EVENT_NAME).collect();
    sheet_name(&format!("{event}_{region}"))
}

/// Content of one sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SheetContent {
    /// A saved moment's scorecard table
    Scorecard(ScorecardTable),
    /// The benchmark derivation audit table
    BenchmarkSummary(Vec<BenchmarkSummaryRow>),
}

/// One sheet in the workbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetSpec {
    /// Sheet tab name, already truncated
    pub name: String,
    /// Sheet content
    pub content: SheetContent,
}

/// Complete workbook descriptor, sheets in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WorkbookSpec {
    /// Sheets in tab order
    pub sheets: Vec<SheetSpec>,
}

/// Build a workbook descriptor from every saved moment, in save order
///
/// When a benchmark summary is supplied it becomes the final sheet.
#[must_use]
pub fn build_workbook(
    moments: &MomentBook,
    summary: Option<&[BenchmarkSummaryRow]>,
) -> WorkbookSpec {
    let mut sheets: Vec<SheetSpec> = moments
        .iter()
        .map(|moment| SheetSpec {
            name: sheet_name(moment.name()),
            content: SheetContent::Scorecard(moment.table().clone()),
        })
        .collect();

    if let Some(rows) = summary {
        if !rows.is_empty() {
            sheets.push(SheetSpec {
                name: sheet_name("Benchmark Summary"),
                content: SheetContent::BenchmarkSummary(rows.to_vec()),
            });
        }
    }

    WorkbookSpec { sheets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scorecard_core::assemble;
    use scorecard_metrics::MetricName;

    #[test]
    fn sheet_name_truncates_at_31() {
        let long = "A Very Long Moment Name That Overflows The Tab";
        assert_eq!(sheet_name(long).chars().count(), 31);
        assert_eq!(sheet_name("Short"), "Short");
    }

    #[test]
    fn event_sheet_name_keeps_region_suffix() {
        let name = event_sheet_name("An Extremely Long Event Name Here", "US");
        assert!(name.ends_with("_US"));
        assert!(name.chars().count() <= 31);
        assert_eq!(event_sheet_name("Launch", "GB"), "Launch_GB");
    }

    #[test]
    fn workbook_orders_moments_then_summary() {
        let metrics = vec![MetricName::from("Views")];
        let table = assemble(&metrics, None, None);
        let mut book = MomentBook::new();
        book.save("Pre-Reveal", &table).unwrap();
        book.save("Launch Week", &table).unwrap();

        let summary = vec![BenchmarkSummaryRow {
            metric: metrics[0].clone(),
            three_month_avg: 50.0,
            proposed_benchmark: 55.0,
            proposed_actual: 110.0,
            n_events_used: 1,
        }];

        let wb = build_workbook(&book, Some(&summary));
        let names: Vec<_> = wb.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Pre-Reveal", "Launch Week", "Benchmark Summary"]);
        assert!(matches!(wb.sheets[2].content, SheetContent::BenchmarkSummary(_)));
    }

    #[test]
    fn empty_summary_adds_no_sheet() {
        let book = MomentBook::new();
        let wb = build_workbook(&book, Some(&[]));
        assert!(wb.sheets.is_empty());
    }
}
