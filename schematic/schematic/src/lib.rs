mod error;
mod schematic;

pub use error::SchematicError;
pub use schematic::{Schematic, SchematicBuilder, default_table_name};
#[cfg(feature = "arrow")]
pub use schematic_arrow as arrow;
pub use schematic_core as core;
#[cfg(feature = "csv")]
pub use schematic_csv as csv;
pub use schematic_dialect as dialect;
