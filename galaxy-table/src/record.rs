//! Reflection from plain structs to table rows.
//!
//! [`record_to_row`] turns any `Serialize` type into `(field, Value)`
//! pairs, so ad-hoc result structs can be appended to a [`Table`]
//! without hand-writing the mapping. Only scalar fields survive:
//! nested sequences and maps are dropped, the way a flat catalog row
//! drops array-valued columns.

use crate::{Table, TableError, TableResult, Value};
use serde::Serialize;

/// Converts a `Serialize` struct into `(field, Value)` pairs.
///
/// Non-scalar fields (arrays, nested structs) are skipped. Fields are
/// returned in name order.
///
/// # Errors
/// `NotARecord` if the value does not serialize to a map (e.g. a bare
/// number or a sequence).
pub fn record_to_row<T: Serialize>(record: &T) -> TableResult<Vec<(String, Value)>> {
    let json = serde_json::to_value(record)?;
    let map = match json {
        serde_json::Value::Object(map) => map,
        other => return Err(TableError::NotARecord(other.to_string())),
    };

    let mut row = Vec::with_capacity(map.len());
    for (field, value) in map {
        let cell = match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => match n.as_f64() {
                    Some(f) => Value::Float(f),
                    None => continue,
                },
            },
            serde_json::Value::String(s) => Value::Str(s),
            // arrays and nested objects have no scalar cell shape
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => continue,
        };
        row.push((field, cell));
    }
    Ok(row)
}

/// Appends a `Serialize` struct to `table` as one row, via
/// [`record_to_row`].
pub fn push_record<T: Serialize>(table: &mut Table, record: &T) -> TableResult<()> {
    table.push_row(record_to_row(record)?)
}
