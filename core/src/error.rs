use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuarryError {
    /// Model constructed without a table name
    #[error("Model name must be provided")]
    MissingTableName,

    /// Descriptor or record has the wrong shape
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Operator key outside `$eq`, `$ne`, `$gt`, `$gte`, `$lt`, `$lte`
    #[error("Unknown operator `{operator}` on field `{field}`")]
    UnknownOperator { field: String, operator: String },

    /// Join requested without any column pairs
    #[error("Relation columns must be provided")]
    InvalidJoinSpec,

    /// Join column pair not in `left:right` form
    #[error("Malformed join pair `{0}`, expected `left:right`")]
    MalformedJoinPair(String),

    /// Join requested without a target table
    #[error("Relation table must be provided")]
    MissingJoinTable,

    /// A paginated row did not carry the cursor key column
    #[error("Row is missing cursor key `{0}`")]
    MissingCursorKey(String),

    /// Cursor text could not be parsed back into a key value
    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    /// Error executing a statement
    #[error("Execution error: {0}")]
    ExecutionError(String),

    /// Error mapping data
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Error loading settings
    #[error("Config error: {0}")]
    Config(String),

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

impl QuarryError {
    /// Returns `true` for errors raised before any statement reaches the executor.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QuarryError::MissingTableName
                | QuarryError::InvalidParams(_)
                | QuarryError::UnknownOperator { .. }
                | QuarryError::InvalidJoinSpec
                | QuarryError::MalformedJoinPair(_)
                | QuarryError::MissingJoinTable
                | QuarryError::InvalidCursor(_)
        )
    }
}

/// Result type for query operations
pub type Result<T> = std::result::Result<T, QuarryError>;
