//! Warehouse dialect layer for `schematic`.
//!
//! This crate maps an inferred [`Schema`](schematic_core::Schema) onto a
//! concrete destination dialect and renders the table definition:
//! - [`Dialect`] bundles an explicit [`CapabilityTable`], identifier rules and
//!   feature flags. Built-in dialects are [`Dialect::redshift`],
//!   [`Dialect::postgres`] and [`Dialect::oracle`].
//! - [`DialectMapper`] turns each inferred column into a [`ConcreteType`],
//!   following configured substitutions and collecting [`Caveat`]s.
//! - [`TableDefinition`] and [`render_create_table`] produce the final
//!   `CREATE TABLE` statement.
//!
//! # Typical Flow
//! ```rust
//! use schematic_core::{InMemorySource, InferenceConfig, infer_schema};
//! use schematic_dialect::{Dialect, TableDefinition, TableOptions};
//!
//! let mut source = InMemorySource::from_strs(&["id"], &[&["42"]]);
//! let schema = infer_schema(&mut source, &InferenceConfig::default()).unwrap();
//! let dialect = Dialect::redshift();
//! let table = TableDefinition::from_schema("t", &schema, &dialect, TableOptions::default()).unwrap();
//! assert_eq!(table.create_sql(&dialect), "CREATE TABLE t (\n    id SMALLINT NOT NULL\n);");
//! ```

mod capability;
mod caveat;
mod dialects;
mod error;
mod identifier;
mod mapper;
mod render;

pub use capability::{
    CapabilityTable, ConcreteType, DecimalType, IntegerType, KindCapability, StringType,
    TimestampType,
};
pub use caveat::{Caveat, CaveatKind};
pub use dialects::{Dialect, DialectFeatures};
pub use error::MapError;
pub use identifier::{CaseFolding, IdentifierRules};
pub use mapper::{DialectMapper, MappedColumn, MappedSchema};
pub use render::{TableDefinition, TableOptions, render_create_table};
