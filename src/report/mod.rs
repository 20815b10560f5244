//! Report emission: summary.json, summary.md, and per-sheet CSV artifacts

pub mod csv;
pub mod markdown;

use crate::error::SummaryResult;
use crate::types::WorkbookSummary;
use std::fs;
use std::path::Path;

/// Write summary.json, pretty-printed with 2-space indentation
pub fn write_json(path: &Path, summary: &WorkbookSummary) -> SummaryResult<()> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    Ok(())
}
