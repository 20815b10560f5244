//! Per-sheet analysis
//!
//! Classification is derived per run, never stored: a column is date-like if
//! its name contains "date" (case-insensitive), numeric if every non-missing
//! cell is a number. Analysis mutates the table (date coercion) and produces
//! the per-sheet summary record.

pub mod dates;
pub mod describe;
pub mod missing;

use crate::types::{SheetSummary, SheetTable};
use indexmap::IndexMap;
use tracing::debug;

/// Analyze one sheet: coerce date columns in place, then build its summary record
pub fn summarize_sheet(table: &mut SheetTable) -> SheetSummary {
    let date_columns = dates::coerce_date_columns(table);

    let mut date_ranges = IndexMap::new();
    for column in &table.columns {
        if date_columns.contains(&column.name) {
            date_ranges.insert(column.name.clone(), dates::date_range(column));
        }
    }

    let numeric_columns: Vec<String> = table
        .columns
        .iter()
        .filter(|column| describe::is_numeric_column(column))
        .map(|column| column.name.clone())
        .collect();

    let numeric_describe = if numeric_columns.is_empty() {
        None
    } else {
        let mut stats = IndexMap::new();
        for column in &table.columns {
            if let Some(summary) = describe::describe_column(column) {
                stats.insert(column.name.clone(), summary);
            }
        }
        Some(stats)
    };

    debug!(
        sheet = table.name.as_str(),
        date_columns = date_columns.len(),
        numeric_columns = numeric_columns.len(),
        "summarized sheet"
    );

    SheetSummary {
        rows: table.rows(),
        columns: table.columns.len(),
        column_names: table.column_names(),
        date_columns,
        date_ranges,
        numeric_columns,
        numeric_describe,
    }
}
