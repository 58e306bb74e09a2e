//! Delimited text [`RowSource`](schematic_core::RowSource) for `schematic`.
//!
//! The first record is the header. Rows are streamed, so only the sampled
//! prefix of a file is ever read. Field counts are not checked here; the
//! inference sampler reports ragged rows as malformed.

mod error;
mod source;

pub use error::CsvSourceError;
pub use source::{CsvOptions, CsvSource};
