//! Per-sheet CSV artifacts

use crate::error::SummaryResult;
use crate::types::NumericDescribe;
use indexmap::IndexMap;
use std::path::Path;

/// Write `{sheet}_numeric_describe.csv`: one row per numeric column, the
/// column name as row index, statistics at 2 decimal places. A null std
/// (fewer than 2 values) is an empty field.
pub fn write_numeric_describe(
    path: &Path,
    stats: &IndexMap<String, NumericDescribe>,
) -> SummaryResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["", "count", "mean", "std", "min", "25%", "50%", "75%", "max"])?;
    for (name, describe) in stats {
        writer.write_record([
            name.clone(),
            describe.count.to_string(),
            format!("{:.2}", describe.mean),
            describe
                .std
                .map_or_else(String::new, |std| format!("{std:.2}")),
            format!("{:.2}", describe.min),
            format!("{:.2}", describe.p25),
            format!("{:.2}", describe.p50),
            format!("{:.2}", describe.p75),
            format!("{:.2}", describe.max),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `{sheet}_missing_values.csv`: header `column,missing_count`, one row
/// per source column. Always produced, for every sheet.
pub fn write_missing_values(path: &Path, counts: &[(String, usize)]) -> SummaryResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["column", "missing_count"])?;
    for (name, count) in counts {
        writer.write_record([name.clone(), count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
