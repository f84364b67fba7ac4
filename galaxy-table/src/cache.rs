//! Cached column subsets of large catalog tables.
//!
//! Survey catalogs are wide; a pipeline usually needs a handful of
//! columns. [`cache_table`] loads the source table once through a
//! caller-supplied loader, keeps only the useful columns, and writes
//! them as JSON so later runs can [`read_cached`] in milliseconds
//! instead of re-parsing the original file.

use crate::{Table, TableResult};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::info;

/// Loads a table via `loader`, selects `useful_cols`, and writes the
/// subset to `cache_loc` as JSON. Returns the cached subset.
///
/// The loader owns the source format (FITS table, CSV, anything); this
/// function only owns the column selection and the cache file.
pub fn cache_table<F>(
    table_loc: &Path,
    cache_loc: &Path,
    useful_cols: &[&str],
    loader: F,
) -> TableResult<Table>
where
    F: FnOnce(&Path) -> TableResult<Table>,
{
    info!(table = %table_loc.display(), "loading table for caching");
    let data = loader(table_loc)?;
    info!(rows = data.n_rows(), "table loaded");

    let subset = data.select(useful_cols)?;
    let file = File::create(cache_loc)?;
    serde_json::to_writer(BufWriter::new(file), &subset)?;
    info!(cache = %cache_loc.display(), cols = subset.n_cols(), "cached column subset");
    Ok(subset)
}

/// Reads a table previously written by [`cache_table`].
pub fn read_cached(cache_loc: &Path) -> TableResult<Table> {
    let file = File::open(cache_loc)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
