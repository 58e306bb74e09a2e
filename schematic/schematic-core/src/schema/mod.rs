//! Inferred, dialect-independent table schema.

mod format;
mod types;

pub use format::format_schema;
pub(crate) use types::validate_names;
pub use types::{Column, Schema, fold_column_name, same_column_name};
