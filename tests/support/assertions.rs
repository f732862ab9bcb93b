use gridiron::domain::table::Table;
use serde_json::Value;

/// Values of `column` in row order.
pub fn column(table: &Table, column: &str) -> Vec<Value> {
    table
        .rows
        .iter()
        .map(|row| row.get(column).cloned().unwrap_or(Value::Null))
        .collect()
}

/// Rows whose `column` equals `value`.
pub fn rows_where(table: &Table, column: &str, value: &Value) -> usize {
    table
        .rows
        .iter()
        .filter(|row| row.get(column) == Some(value))
        .count()
}
