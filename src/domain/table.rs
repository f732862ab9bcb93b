//! Flat tables handed to a sink, and the declarative reshaping that builds them.
//!
//! API payloads are nested JSON. Each table is described by a list of
//! [`FieldMapping`]s naming where a column's value lives in the payload and
//! what type it should end up as. [`flatten`] walks one payload per row.

use serde_json::{Map, Number, Value};

/// One output row. Column order follows insertion order.
pub type Row = Map<String, Value>;

/// Target column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Boolean,
    /// Keep the value as-is, nested structure included.
    Json,
}

/// Where a column comes from in the source payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    /// Dot-separated path; numeric segments index into arrays.
    pub path: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
}

impl FieldMapping {
    pub const fn new(path: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self { path, column, kind }
    }
}

/// A named table of rows ready for a sink.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Prefix every row with the same leading columns.
    pub fn tag(&mut self, columns: &[(&str, Value)]) {
        for row in &mut self.rows {
            let mut tagged = Row::with_capacity(columns.len() + row.len());
            for (name, value) in columns {
                tagged.insert((*name).to_string(), value.clone());
            }
            for (name, value) in std::mem::take(row) {
                tagged.entry(name).or_insert(value);
            }
            *row = tagged;
        }
    }
}

/// Look up a dot-separated path.
#[must_use]
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Build one row from a payload. Missing or unconvertible values become null.
#[must_use]
pub fn flatten(value: &Value, mappings: &[FieldMapping]) -> Row {
    mappings
        .iter()
        .map(|m| {
            let cell = lookup(value, m.path)
                .map(|v| coerce(v, m.kind))
                .unwrap_or(Value::Null);
            (m.column.to_string(), cell)
        })
        .collect()
}

/// Flatten every element of a JSON array payload.
#[must_use]
pub fn flatten_all(values: &[Value], mappings: &[FieldMapping]) -> Vec<Row> {
    values.iter().map(|v| flatten(v, mappings)).collect()
}

fn coerce(value: &Value, kind: FieldKind) -> Value {
    match (kind, value) {
        (_, Value::Null) => Value::Null,
        (FieldKind::Json, v) => v.clone(),

        (FieldKind::Text, Value::String(s)) => Value::String(s.clone()),
        (FieldKind::Text, Value::Number(n)) => Value::String(n.to_string()),
        (FieldKind::Text, Value::Bool(b)) => Value::String(b.to_string()),
        (FieldKind::Text, v) => Value::String(v.to_string()),

        (FieldKind::Integer, Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .map_or(Value::Null, Value::from),
        (FieldKind::Integer, Value::String(s)) => {
            s.trim().parse::<i64>().map_or(Value::Null, Value::from)
        }
        (FieldKind::Integer, Value::Bool(b)) => Value::from(i64::from(*b)),

        (FieldKind::Float, Value::Number(n)) => n
            .as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number),
        (FieldKind::Float, Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number),

        (FieldKind::Boolean, Value::Bool(b)) => Value::Bool(*b),
        (FieldKind::Boolean, Value::Number(n)) => {
            n.as_f64().map_or(Value::Null, |f| Value::Bool(f != 0.0))
        }
        (FieldKind::Boolean, Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Value::Bool(true),
            "false" | "0" => Value::Bool(false),
            _ => Value::Null,
        },

        _ => Value::Null,
    }
}
