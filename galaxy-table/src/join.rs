//! Relational join keyed on row ordinals.
//!
//! [`join_on_index`] merges a left table with a right table through a
//! left column of ordinals into the right table. This is the shape a
//! nearest-neighbor match produces: each left row knows the *position*
//! of its counterpart, so no key column has to be written into the
//! right table first.
//!
//! Column-name collisions are resolved with per-side suffixes. The key
//! column and any column present on only one side keep their names; a
//! name present on both sides becomes `name + left_suffix` on the left
//! and `name + right_suffix` on the right. If suffixing still leaves
//! two output columns with the same name, the join refuses rather than
//! emitting an ambiguous table.

use crate::{Table, TableError, TableResult, Value};
use std::str::FromStr;

/// How unreferenced right rows are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinPolicy {
    /// Only left rows appear in the output, one row each.
    #[default]
    Inner,
    /// Every right row appears at least once; right rows no left row
    /// points at are emitted with left-side cells set to `Null`.
    Right,
}

impl FromStr for JoinPolicy {
    type Err = TableError;

    fn from_str(s: &str) -> TableResult<Self> {
        match s {
            "inner" => Ok(Self::Inner),
            "right" => Ok(Self::Right),
            other => Err(TableError::UnknownJoinPolicy(other.to_string())),
        }
    }
}

/// Joins `left` to `right` through the ordinal column `key`.
///
/// Every value of `left[key]` must be an integer in `[0, right.n_rows())`.
/// Output rows are the left rows in order, each extended with the right
/// row its key points at; under [`JoinPolicy::Right`] the unreferenced
/// right rows follow, in ascending ordinal order, with the key cell set
/// to their own ordinal.
///
/// # Errors
/// `MissingColumn` if `key` is absent, `InvalidJoinKey` for non-integer
/// or out-of-range key cells, `DuplicateColumn` if suffixing cannot
/// disambiguate the output names.
pub fn join_on_index(
    left: &Table,
    key: &str,
    right: &Table,
    policy: JoinPolicy,
    left_suffix: &str,
    right_suffix: &str,
) -> TableResult<Table> {
    let key_values = left.column(key)?;
    let n_right = right.n_rows();

    let mut ordinals = Vec::with_capacity(key_values.len());
    for (row, value) in key_values.iter().enumerate() {
        let ordinal = value
            .as_int()
            .ok_or_else(|| TableError::InvalidJoinKey {
                key: key.to_string(),
                row,
                message: format!("expected an integer ordinal, got {:?}", value),
            })?;
        if ordinal < 0 || ordinal as usize >= n_right {
            return Err(TableError::InvalidJoinKey {
                key: key.to_string(),
                row,
                message: format!("ordinal {} outside right table of {} rows", ordinal, n_right),
            });
        }
        ordinals.push(ordinal as usize);
    }

    let mut out = Table::new();

    // Left columns keep their order; the key is never suffixed.
    for name in left.column_names() {
        let out_name = if name == key || !right.has_column(name) {
            name.clone()
        } else {
            format!("{}{}", name, left_suffix)
        };
        out.add_column(out_name, left.column(name)?.to_vec())?;
    }

    // Right columns follow, gathered through the ordinals.
    for name in right.column_names() {
        let collides = left.has_column(name) || name == key;
        let out_name = if collides {
            format!("{}{}", name, right_suffix)
        } else {
            name.clone()
        };
        let source = right.column(name)?;
        let gathered: Vec<Value> = ordinals.iter().map(|&i| source[i].clone()).collect();
        out.add_column(out_name, gathered)?;
    }

    if policy == JoinPolicy::Right {
        append_unreferenced_right_rows(&mut out, left, key, right, &ordinals)?;
    }

    Ok(out)
}

fn append_unreferenced_right_rows(
    out: &mut Table,
    left: &Table,
    key: &str,
    right: &Table,
    ordinals: &[usize],
) -> TableResult<()> {
    let mut referenced = vec![false; right.n_rows()];
    for &i in ordinals {
        referenced[i] = true;
    }

    let n_left_cols = left.n_cols();
    let names: Vec<String> = out.column_names().to_vec();
    let mut rows = Vec::new();
    for (ordinal, seen) in referenced.iter().enumerate() {
        if *seen {
            continue;
        }
        let mut row: Vec<(String, Value)> = Vec::with_capacity(names.len());
        for (left_name, out_name) in left.column_names().iter().zip(names.iter()) {
            let cell = if left_name == key {
                Value::Int(ordinal as i64)
            } else {
                Value::Null
            };
            row.push((out_name.clone(), cell));
        }
        for (right_name, out_name) in right.column_names().iter().zip(names[n_left_cols..].iter())
        {
            row.push((out_name.clone(), right.value(right_name, ordinal)?.clone()));
        }
        rows.push(row);
    }

    for row in rows {
        out.push_row(row)?;
    }
    Ok(())
}
