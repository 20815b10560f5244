//! Excel importer implementation - Excel (.xlsx) → sheet tables

use crate::error::SummaryResult;
use crate::types::{CellValue, Column, SheetTable};
use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Excel importer producing one [`SheetTable`] per worksheet, in workbook order
pub struct WorkbookImporter {
    path: PathBuf,
}

impl WorkbookImporter {
    /// Create a new workbook importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Import every sheet of the workbook
    pub fn import(&self) -> SummaryResult<Vec<SheetTable>> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)?;

        let sheet_names = workbook.sheet_names().to_vec();
        debug!(sheets = sheet_names.len(), "opened workbook");

        let mut tables = Vec::with_capacity(sheet_names.len());
        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name)?;
            tables.push(read_sheet(&sheet_name, &range));
        }

        Ok(tables)
    }
}

/// Read one worksheet range into a column-major table.
///
/// Row 0 is the header; blank header cells fall back to `col_{i}`. A sheet
/// with only a header row yields columns with zero data rows; a fully empty
/// sheet yields a table with no columns.
fn read_sheet(sheet_name: &str, range: &Range<Data>) -> SheetTable {
    let mut table = SheetTable::new(sheet_name.to_string());

    if range.is_empty() {
        return table;
    }

    let (height, width) = range.get_size();

    for col in 0..width {
        let name = header_name(range.get((0, col)), col);
        let mut cells = Vec::with_capacity(height.saturating_sub(1));
        for row in 1..height {
            let cell = range.get((row, col)).map_or(CellValue::Empty, convert_cell);
            cells.push(cell);
        }
        table.add_column(Column::new(name, cells));
    }

    debug!(
        sheet = sheet_name,
        rows = table.rows(),
        columns = table.columns.len(),
        "read sheet"
    );
    table
}

/// Header cell → column name, with a positional fallback for blanks
fn header_name(cell: Option<&Data>, col: usize) -> String {
    match cell {
        Some(Data::String(s)) if !s.is_empty() => s.clone(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) => f.to_string(),
        _ => format!("col_{}", col),
    }
}

/// Convert a calamine cell into the summarizer's cell model.
///
/// Error cells become missing values, matching how unparseable data is
/// treated everywhere else in the pipeline.
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map_or(CellValue::Empty, CellValue::DateTime),
        Data::DateTimeIso(s) => cell
            .as_datetime()
            .map_or(CellValue::Text(s.clone()), CellValue::DateTime),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}
