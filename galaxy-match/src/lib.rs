//! Nearest-neighbor cross-matching of galaxy catalogs by sky position.
//!
//! Given a table of subject galaxies and a reference catalog, both with
//! `ra`/`dec` columns in degrees, [`match_to_catalog`] finds each
//! subject's closest catalog row on the sphere, keeps the pairs closer
//! than a matching radius, and merges their columns into one table —
//! returning the too-distant subjects separately.
//!
//! ```
//! use galaxy_match::{match_to_catalog, MatchConfig};
//! use galaxy_table::{Table, Value};
//!
//! let mut galaxies = Table::new();
//! galaxies.push_row(vec![
//!     ("name", Value::from("a")),
//!     ("ra", Value::from(10.0)),
//!     ("dec", Value::from(10.0)),
//! ])?;
//!
//! let mut catalog = Table::new();
//! catalog.push_row(vec![
//!     ("name", Value::from("a")),
//!     ("ra", Value::from(10.0)),
//!     ("dec", Value::from(10.0)),
//! ])?;
//!
//! let (matched, unmatched) = match_to_catalog(&galaxies, &catalog, &MatchConfig::default())?;
//! assert_eq!(matched.n_rows(), 1);
//! assert!(unmatched.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The operation is pure: it never mutates its inputs, holds no state,
//! and is safe to call concurrently from independent tasks as long as
//! each call owns its inputs.

mod crossmatch;
mod errors;
mod neighbors;

pub use crossmatch::{match_to_catalog, MatchConfig, BEST_MATCH_COL, SKY_SEPARATION_COL};
pub use errors::{MatchError, MatchResult};

// callers pick a policy through the same type the join uses
pub use galaxy_table::JoinPolicy;
