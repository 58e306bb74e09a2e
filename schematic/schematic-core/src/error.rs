//! Error types for the inference pass.

use crate::source::SourceError;

/// Errors that abort an inference pass. No partial schema is produced when
/// one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum InferError {
    /// A data row's field count differs from the header's column count.
    #[error("malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The row source failed to produce a row.
    #[error("failed to read row {row}: {source}")]
    Source {
        row: usize,
        #[source]
        source: SourceError,
    },

    /// The header declares no columns.
    #[error("source header has no columns")]
    EmptyHeader,

    /// Two header columns share a name (compared case-insensitively).
    #[error("column '{name}' appears more than once in the header")]
    DuplicateColumn { name: String },
}
