//! Dialect-independent type inference core for `schematic`.
//!
//! This crate turns a [`RowSource`] into an ordered [`Schema`] of inferred
//! column types. It knows nothing about SQL dialects; the resulting
//! [`TypeCandidate`]s are mapped to concrete warehouse types downstream.
//!
//! The pipeline is:
//! 1. [`Sampler`] bounds the source and checks every row against the header.
//! 2. [`Detector`] classifies each raw field into a [`TypeCandidate`].
//! 3. [`Unifier`] folds candidates into one running [`ColumnType`] per column
//!    using the lattice join in [`ColumnType::merge`].
//! 4. [`Unifier::finish`] freezes the running types into a [`Schema`].
//!
//! [`infer_schema`] and [`infer_schema_parallel`] drive the whole pass.

mod candidate;
mod config;
mod detector;
mod error;
mod infer;
mod lattice;
mod sampler;
mod schema;
mod source;
mod unifier;

pub use candidate::{AbstractKind, IntWidth, TypeCandidate};
pub use config::{EmptyColumnPolicy, InferenceConfig, InferenceConfigBuilder, NumericLocale};
pub use detector::Detector;
pub use error::InferError;
pub use infer::{infer_schema, infer_schema_parallel};
pub use lattice::ColumnType;
pub use sampler::Sampler;
pub use schema::{Column, Schema, fold_column_name, format_schema, same_column_name};
pub use source::{InMemorySource, Row, RowSource, SourceError};
pub use unifier::Unifier;
