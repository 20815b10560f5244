//! summary.md renderer

use crate::types::WorkbookSummary;

/// Render the Markdown report: one heading for the workbook, one section per
/// sheet, in workbook order.
pub fn render(summary: &WorkbookSummary) -> String {
    let mut lines = vec![
        "# Journal Entry Sample Summary".to_string(),
        String::new(),
        format!("**Source file:** `{}`", summary.source_file),
        format!("**Sheet count:** {}", summary.sheet_count),
        String::new(),
    ];

    for (sheet_name, sheet) in &summary.sheets {
        lines.push(format!("## Sheet: {sheet_name}"));
        lines.push(format!("- Rows: {}", sheet.rows));
        lines.push(format!("- Columns: {}", sheet.columns));
        lines.push(format!(
            "- Date columns: {}",
            join_or_none(&sheet.date_columns)
        ));

        if !sheet.date_ranges.is_empty() {
            lines.push("- Date ranges:".to_string());
            for (column, range) in &sheet.date_ranges {
                lines.push(format!(
                    "  - {}: {} to {}",
                    column,
                    range.min.as_deref().unwrap_or("None"),
                    range.max.as_deref().unwrap_or("None"),
                ));
            }
        }

        lines.push(format!(
            "- Numeric columns: {}",
            join_or_none(&sheet.numeric_columns)
        ));
        lines.push(String::new());
    }

    lines.join("\n")
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "None detected".to_string()
    } else {
        names.join(", ")
    }
}
