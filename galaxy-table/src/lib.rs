//! Column-oriented tables for galaxy catalogs.
//!
//! A small relational core shaped by what a survey pipeline actually
//! does with catalogs: select the useful columns, filter rows, rename,
//! join match results, cache subsets to disk.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`table`] | [`Table`] container, [`RowRef`], select/rename/filter |
//! | [`value`] | [`Value`] cell type (ints, floats, strings, angles, null) |
//! | [`join`] | [`join_on_index`] with [`JoinPolicy`] and collision suffixes |
//! | [`cache`] | [`cache_table`]/[`read_cached`] JSON column-subset cache |
//! | [`record`] | [`record_to_row`] reflection from `Serialize` structs |
//!
//! # Quick Start
//!
//! ```
//! use galaxy_table::{Table, Value};
//!
//! let mut galaxies = Table::new();
//! galaxies
//!     .push_row(vec![
//!         ("name", Value::from("a")),
//!         ("ra", Value::from(10.0)),
//!         ("dec", Value::from(10.0)),
//!     ])
//!     .unwrap();
//!
//! let bright = galaxies.filter(|row| row.get("name").is_some());
//! assert_eq!(bright.n_rows(), 1);
//! ```

pub mod cache;
pub mod errors;
pub mod join;
pub mod record;
pub mod table;
pub mod value;

pub use cache::{cache_table, read_cached};
pub use errors::{TableError, TableResult};
pub use join::{join_on_index, JoinPolicy};
pub use record::{push_record, record_to_row};
pub use table::{RowRef, Table};
pub use value::Value;
