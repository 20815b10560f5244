//! Date-column coercion and range computation

use crate::types::{CellValue, Column, DateRange, SheetTable};
use chrono::{Days, Duration, NaiveDate, NaiveDateTime};

/// Datetime formats attempted for text cells, most specific first
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Date-only formats attempted for text cells (midnight assumed)
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// True when a column name marks the column as date-like
pub fn is_date_named(name: &str) -> bool {
    name.to_lowercase().contains("date")
}

/// Coerce every date-named column to timestamps in place.
///
/// Cells that cannot be parsed become missing values; this is best-effort
/// coercion and never fails. Returns the date-column names in column order.
pub fn coerce_date_columns(table: &mut SheetTable) -> Vec<String> {
    let mut date_columns = Vec::new();
    for column in &mut table.columns {
        if !is_date_named(&column.name) {
            continue;
        }
        for cell in &mut column.cells {
            *cell = coerce_cell(cell);
        }
        date_columns.push(column.name.clone());
    }
    date_columns
}

/// Earliest/latest timestamp of a date column as ISO-8601 strings.
///
/// Both bounds are null when no cell parsed.
pub fn date_range(column: &Column) -> DateRange {
    let valid = column.cells.iter().filter_map(CellValue::as_datetime);
    let min = valid.clone().min().map(format_iso);
    let max = valid.max().map(format_iso);
    DateRange { min, max }
}

fn format_iso(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn coerce_cell(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::DateTime(dt) => CellValue::DateTime(*dt),
        CellValue::Number(n) => {
            from_excel_serial(*n).map_or(CellValue::Empty, CellValue::DateTime)
        }
        CellValue::Text(s) => {
            parse_datetime_text(s).map_or(CellValue::Empty, CellValue::DateTime)
        }
        _ => CellValue::Empty,
    }
}

/// Excel serial number (days since 1899-12-30); the fractional part is time of day
fn from_excel_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = base.checked_add_days(Days::new(serial.trunc() as u64))?;
    let seconds = (serial.fract() * 86_400.0).round() as i64;
    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::seconds(seconds))
}

fn parse_datetime_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_date_named_case_insensitive() {
        assert!(is_date_named("Txn Date"));
        assert!(is_date_named("POSTING_DATE"));
        assert!(is_date_named("dateOfBirth"));
        assert!(!is_date_named("Amount"));
        assert!(!is_date_named("data"));
    }

    #[test]
    fn test_parse_datetime_text_formats() {
        assert_eq!(
            parse_datetime_text("2023-01-05"),
            NaiveDate::from_ymd_opt(2023, 1, 5).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(
            parse_datetime_text("2023-01-05T13:45:30"),
            NaiveDate::from_ymd_opt(2023, 1, 5).and_then(|d| d.and_hms_opt(13, 45, 30))
        );
        assert_eq!(
            parse_datetime_text("2023-01-05 13:45:30"),
            NaiveDate::from_ymd_opt(2023, 1, 5).and_then(|d| d.and_hms_opt(13, 45, 30))
        );
        assert_eq!(
            parse_datetime_text("01/31/2023"),
            NaiveDate::from_ymd_opt(2023, 1, 31).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(parse_datetime_text("bad"), None);
        assert_eq!(parse_datetime_text(""), None);
    }

    #[test]
    fn test_from_excel_serial() {
        // 2023-01-05 is 44931 days after 1899-12-30
        let expected = NaiveDate::from_ymd_opt(2023, 1, 5).and_then(|d| d.and_hms_opt(0, 0, 0));
        assert_eq!(from_excel_serial(44931.0), expected);

        // Noon is serial + 0.5
        let noon = NaiveDate::from_ymd_opt(2023, 1, 5).and_then(|d| d.and_hms_opt(12, 0, 0));
        assert_eq!(from_excel_serial(44931.5), noon);

        assert_eq!(from_excel_serial(-1.0), None);
        assert_eq!(from_excel_serial(f64::NAN), None);
    }

    #[test]
    fn test_coerce_date_columns_in_place() {
        let mut table = SheetTable::new("t".to_string());
        table.add_column(Column::new(
            "Txn Date".to_string(),
            vec![
                CellValue::Text("2023-01-05".to_string()),
                CellValue::Text("bad".to_string()),
            ],
        ));
        table.add_column(Column::new(
            "Amount".to_string(),
            vec![CellValue::Number(1.0), CellValue::Number(2.0)],
        ));

        let date_columns = coerce_date_columns(&mut table);
        assert_eq!(date_columns, vec!["Txn Date"]);

        let coerced = &table.columns[0].cells;
        assert!(matches!(coerced[0], CellValue::DateTime(_)));
        assert_eq!(coerced[1], CellValue::Empty);
        // Non-date columns are untouched
        assert_eq!(table.columns[1].cells[0], CellValue::Number(1.0));
    }

    #[test]
    fn test_date_range_drops_missing() {
        let column = Column::new(
            "date".to_string(),
            vec![
                CellValue::DateTime(
                    NaiveDate::from_ymd_opt(2023, 3, 10)
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .unwrap(),
                ),
                CellValue::Empty,
                CellValue::DateTime(
                    NaiveDate::from_ymd_opt(2023, 1, 5)
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .unwrap(),
                ),
            ],
        );
        let range = date_range(&column);
        assert_eq!(range.min.as_deref(), Some("2023-01-05T00:00:00"));
        assert_eq!(range.max.as_deref(), Some("2023-03-10T00:00:00"));
    }

    #[test]
    fn test_date_range_all_missing() {
        let column = Column::new(
            "date".to_string(),
            vec![CellValue::Empty, CellValue::Empty],
        );
        let range = date_range(&column);
        assert_eq!(range.min, None);
        assert_eq!(range.max, None);
    }
}
