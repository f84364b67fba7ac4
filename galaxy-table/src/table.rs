//! Column-oriented in-memory table.
//!
//! [`Table`] keeps an ordered list of column names and one value vector
//! per column, all of equal length. It supports the handful of
//! relational operations a catalog pipeline needs (select, rename,
//! filter, row append), with joins in [`crate::join`]. It is not a
//! general dataframe: no grouping, no aggregation, no lazy evaluation.

use crate::{TableError, TableResult, Value};
use serde::{Deserialize, Serialize};

/// An ordered collection of equally-long named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<Value>>,
}

/// A borrowed view of one table row.
#[derive(Clone, Copy)]
pub struct RowRef<'a> {
    table: &'a Table,
    row: usize,
}

impl<'a> RowRef<'a> {
    /// The value in the named column, if the column exists.
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        let col = self.table.names.iter().position(|n| n == name)?;
        Some(&self.table.columns[col][self.row])
    }

    /// Ordinal of this row in the table.
    pub fn index(&self) -> usize {
        self.row
    }
}

impl Table {
    /// Creates an empty table with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from `(name, values)` pairs.
    ///
    /// # Errors
    /// `DuplicateColumn` if a name repeats; `LengthMismatch` if the
    /// value vectors differ in length.
    pub fn from_columns<N: Into<String>>(pairs: Vec<(N, Vec<Value>)>) -> TableResult<Self> {
        let mut table = Self::new();
        for (name, values) in pairs {
            table.add_column(name.into(), values)?;
        }
        Ok(table)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.names.len()
    }

    /// True if the table has no rows (a table with columns but no rows
    /// is empty).
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Column names, in order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// The values of the named column.
    ///
    /// # Errors
    /// `MissingColumn` if no column has that name.
    pub fn column(&self, name: &str) -> TableResult<&[Value]> {
        let idx = self.column_index(name)?;
        Ok(&self.columns[idx])
    }

    /// The value at (`name`, `row`).
    pub fn value(&self, name: &str, row: usize) -> TableResult<&Value> {
        let idx = self.column_index(name)?;
        self.columns[idx]
            .get(row)
            .ok_or_else(|| TableError::LengthMismatch {
                column: name.to_string(),
                expected: row + 1,
                got: self.columns[idx].len(),
            })
    }

    /// A borrowed view of row `row`. Panics if `row >= n_rows()`.
    pub fn row(&self, row: usize) -> RowRef<'_> {
        assert!(row < self.n_rows(), "row {} out of bounds", row);
        RowRef { table: self, row }
    }

    /// Appends a column.
    ///
    /// # Errors
    /// `DuplicateColumn` if the name is taken; `LengthMismatch` if the
    /// table already has columns of a different length.
    pub fn add_column<N: Into<String>>(&mut self, name: N, values: Vec<Value>) -> TableResult<()> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(TableError::DuplicateColumn(name));
        }
        if !self.names.is_empty() && values.len() != self.n_rows() {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.n_rows(),
                got: values.len(),
            });
        }
        self.names.push(name);
        self.columns.push(values);
        Ok(())
    }

    /// Appends one row given as `(column, value)` pairs.
    ///
    /// On an empty table the first row defines the columns, in the
    /// order given. Afterwards every row must cover exactly the
    /// existing columns (in any order).
    pub fn push_row<N: AsRef<str>>(&mut self, row: Vec<(N, Value)>) -> TableResult<()> {
        if self.names.is_empty() {
            for (name, value) in row {
                self.names.push(name.as_ref().to_string());
                self.columns.push(vec![value]);
            }
            return Ok(());
        }

        if row.len() != self.names.len() {
            let field = row
                .iter()
                .map(|(n, _)| n.as_ref())
                .find(|n| !self.has_column(n))
                .unwrap_or("<missing>")
                .to_string();
            return Err(TableError::RowShapeMismatch {
                field,
                columns: self.names.join(", "),
            });
        }

        let mut cells: Vec<Option<Value>> = vec![None; self.names.len()];
        for (name, value) in row {
            let idx = self.column_index(name.as_ref()).map_err(|_| {
                TableError::RowShapeMismatch {
                    field: name.as_ref().to_string(),
                    columns: self.names.join(", "),
                }
            })?;
            cells[idx] = Some(value);
        }
        for (idx, cell) in cells.into_iter().enumerate() {
            match cell {
                Some(value) => self.columns[idx].push(value),
                None => {
                    // a duplicate field left another column uncovered
                    let field = self.names[idx].clone();
                    self.truncate_columns_to_shortest();
                    return Err(TableError::RowShapeMismatch {
                        field,
                        columns: self.names.join(", "),
                    });
                }
            }
        }
        Ok(())
    }

    /// A new table containing only the named columns, in the given order.
    pub fn select(&self, names: &[&str]) -> TableResult<Table> {
        let mut out = Table::new();
        for name in names {
            let idx = self.column_index(name)?;
            out.add_column(name.to_string(), self.columns[idx].clone())?;
        }
        Ok(out)
    }

    /// Renames a column in place.
    pub fn rename_column(&mut self, old: &str, new: &str) -> TableResult<()> {
        if old != new && self.has_column(new) {
            return Err(TableError::DuplicateColumn(new.to_string()));
        }
        let idx = self.column_index(old)?;
        self.names[idx] = new.to_string();
        Ok(())
    }

    /// A new table with the rows for which `predicate` returns true.
    /// Row order is preserved.
    pub fn filter<F>(&self, mut predicate: F) -> Table
    where
        F: FnMut(RowRef<'_>) -> bool,
    {
        let keep: Vec<usize> = (0..self.n_rows())
            .filter(|&row| predicate(RowRef { table: self, row }))
            .collect();
        self.take_rows(&keep)
    }

    /// A new table containing the given rows, in the given order.
    /// Out-of-range indices are skipped.
    pub fn take_rows(&self, rows: &[usize]) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|col| {
                rows.iter()
                    .filter_map(|&r| col.get(r).cloned())
                    .collect::<Vec<_>>()
            })
            .collect();
        Table {
            names: self.names.clone(),
            columns,
        }
    }

    pub(crate) fn column_index(&self, name: &str) -> TableResult<usize> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    fn truncate_columns_to_shortest(&mut self) {
        let min = self.columns.iter().map(Vec::len).min().unwrap_or(0);
        for col in &mut self.columns {
            col.truncate(min);
        }
    }
}
