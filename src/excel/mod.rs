//! Workbook ingestion
//!
//! Reads an .xlsx workbook into column-major [`SheetTable`]s, one per sheet,
//! in workbook order. The first row of each sheet is the header row.
//!
//! [`SheetTable`]: crate::types::SheetTable

mod importer;

pub use importer::WorkbookImporter;
