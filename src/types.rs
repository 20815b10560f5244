use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::Serialize;

//==============================================================================
// Sheet Data Model
//==============================================================================

/// A single cell read from a worksheet
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Numeric cell (integers are widened to f64)
    Number(f64),
    /// Text cell
    Text(String),
    /// Boolean cell
    Bool(bool),
    /// Datetime cell (native Excel datetime or coerced date column value)
    DateTime(NaiveDateTime),
    /// Absent, blank, or unparseable cell
    Empty,
}

impl CellValue {
    /// True for absent/blank/unparseable cells (the "missing" of the data model)
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Numeric view of the cell, if it is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Datetime view of the cell, if it is a datetime
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

/// A named column of cells, in worksheet row order
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl Column {
    pub fn new(name: String, cells: Vec<CellValue>) -> Self {
        Self { name, cells }
    }

    /// Count of missing cells in this column
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_missing()).count()
    }
}

/// One worksheet as a column-major table with a header row already consumed
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: String,
    pub columns: Vec<Column>,
}

impl SheetTable {
    pub fn new(name: String) -> Self {
        Self {
            name,
            columns: Vec::new(),
        }
    }

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Number of data rows (all columns are padded to equal length on import)
    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, |col| col.cells.len())
    }

    /// Column names in worksheet order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|col| col.name.clone()).collect()
    }
}

//==============================================================================
// Summary Records (summary.json shape)
//==============================================================================

/// Earliest/latest timestamp of a date column, ISO-8601; null when no cell parsed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateRange {
    pub min: Option<String>,
    pub max: Option<String>,
}

/// Descriptive statistics for one numeric column, rounded to 2 decimal places
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericDescribe {
    pub count: u64,
    pub mean: f64,
    /// Sample standard deviation; null when fewer than 2 values
    pub std: Option<f64>,
    pub min: f64,
    #[serde(rename = "25%")]
    pub p25: f64,
    #[serde(rename = "50%")]
    pub p50: f64,
    #[serde(rename = "75%")]
    pub p75: f64,
    pub max: f64,
}

/// Per-sheet summary record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSummary {
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    pub date_columns: Vec<String>,
    pub date_ranges: IndexMap<String, DateRange>,
    pub numeric_columns: Vec<String>,
    /// Omitted entirely when the sheet has no numeric columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_describe: Option<IndexMap<String, NumericDescribe>>,
}

/// Top-level summary.json document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkbookSummary {
    pub source_file: String,
    pub sheet_count: usize,
    /// Sheet name → summary, in workbook order
    pub sheets: IndexMap<String, SheetSummary>,
}
