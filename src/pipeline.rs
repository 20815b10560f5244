//! End-to-end summarize pipeline: ingest → analyze → emit
//!
//! Strictly sequential: sheets are processed in workbook order, once. Per-sheet
//! CSVs are written as each sheet completes; a failure partway through leaves
//! earlier artifacts on disk (single-operator batch semantics, no rollback).

use crate::analyze;
use crate::error::SummaryResult;
use crate::excel::WorkbookImporter;
use crate::report;
use crate::types::WorkbookSummary;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Summarize one workbook, writing every artifact into `output_dir`.
///
/// Creates `output_dir` if absent. Re-running over the same input overwrites
/// prior outputs and produces byte-identical summary.json content.
pub fn run_summary(source: &Path, output_dir: &Path) -> SummaryResult<WorkbookSummary> {
    fs::create_dir_all(output_dir)?;

    let tables = WorkbookImporter::new(source).import()?;
    info!(
        source = %source.display(),
        sheets = tables.len(),
        "workbook loaded"
    );

    let source_file = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut summary = WorkbookSummary {
        source_file,
        sheet_count: tables.len(),
        sheets: IndexMap::new(),
    };

    for mut table in tables {
        let sheet_summary = analyze::summarize_sheet(&mut table);

        if let Some(stats) = &sheet_summary.numeric_describe {
            let path = output_dir.join(format!("{}_numeric_describe.csv", table.name));
            report::csv::write_numeric_describe(&path, stats)?;
        }

        // Missing counts run after date coercion so unparseable dates count
        let counts = analyze::missing::missing_counts(&table);
        let path = output_dir.join(format!("{}_missing_values.csv", table.name));
        report::csv::write_missing_values(&path, &counts)?;

        info!(sheet = table.name.as_str(), "sheet summarized");
        summary.sheets.insert(table.name.clone(), sheet_summary);
    }

    report::write_json(&output_dir.join("summary.json"), &summary)?;
    fs::write(
        output_dir.join("summary.md"),
        report::markdown::render(&summary),
    )?;

    Ok(summary)
}
