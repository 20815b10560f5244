//! Descriptive statistics for numeric columns

use crate::types::{CellValue, Column, NumericDescribe};

/// True when every non-missing cell is numeric and at least one exists.
///
/// Booleans and coerced date cells are not numeric, so date-named columns
/// never classify as numeric after coercion.
pub fn is_numeric_column(column: &Column) -> bool {
    let mut any = false;
    for cell in &column.cells {
        match cell {
            CellValue::Number(_) => any = true,
            CellValue::Empty => {}
            _ => return false,
        }
    }
    any
}

/// Compute the describe record for a numeric column.
///
/// Returns `None` when the column has no numeric values (or is not numeric).
/// All statistics are rounded to 2 decimal places.
pub fn describe_column(column: &Column) -> Option<NumericDescribe> {
    if !is_numeric_column(column) {
        return None;
    }

    let mut values: Vec<f64> = column
        .cells
        .iter()
        .filter_map(CellValue::as_number)
        .collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    Some(NumericDescribe {
        count: count as u64,
        mean: round2(mean),
        std: sample_std(&values, mean).map(round2),
        min: round2(values[0]),
        p25: round2(quantile(&values, 0.25)),
        p50: round2(quantile(&values, 0.50)),
        p75: round2(quantile(&values, 0.75)),
        max: round2(values[count - 1]),
    })
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sample standard deviation (ddof = 1); undefined below 2 values
fn sample_std(values: &[f64], mean: f64) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (n - 1) as f64;
    Some(variance.sqrt())
}

/// Linear-interpolation quantile over a sorted slice (0.0 ≤ q ≤ 1.0)
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let position = q * (n - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    sorted[lower] + (position - lower as f64) * (sorted[upper] - sorted[lower])
}
