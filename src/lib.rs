//! Sheetsum - workbook summarizer
//!
//! Reads a single .xlsx workbook and writes per-sheet descriptive statistics
//! as a JSON summary, per-sheet CSV files, and a Markdown report.
//!
//! # Pipeline
//!
//! - Ingestion: open the workbook and read each sheet into a column-major table
//! - Analysis: detect date-like columns by name, coerce them to timestamps,
//!   compute numeric describe statistics and missing-value counts
//! - Emission: summary.json, summary.md, and two CSV artifacts per sheet
//!
//! # Example
//!
//! ```no_run
//! use sheetsum::pipeline::run_summary;
//! use std::path::Path;
//!
//! let summary = run_summary(Path::new("je_samples.xlsx"), Path::new("outputs"))?;
//! println!("Sheets: {}", summary.sheet_count);
//! # Ok::<(), sheetsum::SummaryError>(())
//! ```

pub mod analyze;
pub mod cli;
pub mod error;
pub mod excel;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{SummaryError, SummaryResult};
pub use pipeline::run_summary;
pub use types::{
    CellValue, Column, DateRange, NumericDescribe, SheetSummary, SheetTable, WorkbookSummary,
};
