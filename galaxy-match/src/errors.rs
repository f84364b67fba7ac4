use galaxy_table::TableError;
use thiserror::Error;

/// Convenience alias for `Result<T, MatchError>`.
pub type MatchResult<T> = Result<T, MatchError>;

#[derive(Debug, Error)]
pub enum MatchError {
    /// A coordinate cell is non-numeric, non-finite, or outside the
    /// valid RA/Dec domain. Surfaced immediately; no partial result.
    #[error("invalid coordinate in {table} column {column:?} at row {row}: {message}")]
    InvalidCoordinate {
        table: String,
        column: String,
        row: usize,
        message: String,
    },

    /// The catalog has zero rows, so nearest-neighbor search is undefined.
    #[error("catalog is empty: nearest-neighbor matching is undefined")]
    EmptyCatalog,

    /// A join policy name that is neither `"inner"` nor `"right"`.
    /// This is a programming error, not a condition to retry.
    #[error("unknown join policy: {0:?} (expected \"inner\" or \"right\")")]
    UnknownJoinPolicy(String),

    /// Table-level failure while annotating or merging.
    #[error(transparent)]
    Table(#[from] TableError),
}

impl MatchError {
    pub(crate) fn invalid_coordinate(
        table: &str,
        column: &str,
        row: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidCoordinate {
            table: table.to_string(),
            column: column.to_string(),
            row,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_coordinate_display() {
        let err = MatchError::invalid_coordinate("subjects", "ra", 3, "not finite");
        let msg = err.to_string();
        assert!(msg.contains("subjects"));
        assert!(msg.contains("\"ra\""));
        assert!(msg.contains("row 3"));
        assert!(msg.contains("not finite"));
    }

    #[test]
    fn test_empty_catalog_display() {
        assert!(MatchError::EmptyCatalog.to_string().contains("empty"));
    }
}
