use thiserror::Error;

/// Convenience alias for `Result<T, TableError>`.
pub type TableResult<T> = Result<T, TableError>;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("no such column: {0}")]
    MissingColumn(String),

    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("column {column} has {got} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    #[error("row has unexpected field {field}, table columns are [{columns}]")]
    RowShapeMismatch { field: String, columns: String },

    #[error("unknown join policy: {0:?} (expected \"inner\" or \"right\")")]
    UnknownJoinPolicy(String),

    #[error("join key {key:?} at row {row}: {message}")]
    InvalidJoinKey {
        key: String,
        row: usize,
        message: String,
    },

    #[error("value is not a flat record: {0}")]
    NotARecord(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
