//! Arrow bridge for `schematic`.
//!
//! Converts an inferred [`schematic_core::Schema`] into an Arrow
//! [`Schema`](arrow::datatypes::Schema) so the result can be handed to
//! Arrow-based readers and writers.

mod schema_convert;

pub use schema_convert::{candidate_to_arrow_type, schema_to_arrow};
