//! Error types for the [`Schematic`](crate::Schematic) facade.

use std::path::PathBuf;

use schematic_core::InferError;
use schematic_dialect::MapError;

#[derive(Debug, thiserror::Error)]
pub enum SchematicError {
    /// The inference pass failed (malformed row, source failure, bad header).
    #[error(transparent)]
    Infer(#[from] InferError),

    /// The schema could not be mapped onto the dialect.
    #[error(transparent)]
    Map(#[from] MapError),

    /// The input file could not be opened or its header read.
    #[cfg(feature = "csv")]
    #[error(transparent)]
    Csv(#[from] schematic_csv::CsvSourceError),

    /// No table name was given and none can be derived from the input path.
    #[error("cannot derive a table name from {}", path.display())]
    InvalidTableName { path: PathBuf },
}
