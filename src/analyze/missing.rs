//! Missing-value counts

use crate::types::SheetTable;

/// Per-column missing counts, in column order. Runs for every column type.
pub fn missing_counts(table: &SheetTable) -> Vec<(String, usize)> {
    table
        .columns
        .iter()
        .map(|column| (column.name.clone(), column.missing_count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellValue, Column};

    #[test]
    fn test_missing_counts_all_columns() {
        let mut table = SheetTable::new("t".to_string());
        table.add_column(Column::new(
            "amount".to_string(),
            vec![CellValue::Number(1.0), CellValue::Empty],
        ));
        table.add_column(Column::new(
            "memo".to_string(),
            vec![CellValue::Empty, CellValue::Empty],
        ));
        table.add_column(Column::new(
            "flag".to_string(),
            vec![CellValue::Bool(true), CellValue::Bool(false)],
        ));

        let counts = missing_counts(&table);
        assert_eq!(
            counts,
            vec![
                ("amount".to_string(), 1),
                ("memo".to_string(), 2),
                ("flag".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_missing_counts_zero_rows() {
        let mut table = SheetTable::new("t".to_string());
        table.add_column(Column::new("a".to_string(), Vec::new()));
        table.add_column(Column::new("b".to_string(), Vec::new()));
        assert_eq!(
            missing_counts(&table),
            vec![("a".to_string(), 0), ("b".to_string(), 0)]
        );
    }
}
