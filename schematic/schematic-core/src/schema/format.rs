use std::fmt::{Error, Write as _};

use super::Schema;

/// Format an inferred schema one column per line:
/// `name: { type: decimal(5,3), nullable: false }`.
pub fn format_schema(schema: &Schema) -> Result<String, Error> {
    let mut out = String::new();
    for column in schema.iter() {
        writeln!(
            out,
            "{}: {{ type: {}, nullable: {} }}",
            column.name, column.data_type, column.nullable
        )?;
    }
    Ok(out)
}
