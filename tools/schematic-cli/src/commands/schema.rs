use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use schematic::{arrow::schema_to_arrow, core::format_schema};

use super::{InferenceArgs, emit};
use crate::format::SchemaFormat;

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to the CSV file
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = SchemaFormat::Text)]
    format: SchemaFormat,

    /// Append per-column value counts
    #[arg(long)]
    stats: bool,

    #[command(flatten)]
    inference: InferenceArgs,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let schematic = self.inference.builder()?.build();
        let schema = schematic.infer_csv(&self.input)?;

        let mut lines: Vec<String> = match self.format {
            SchemaFormat::Text => vec![format_schema(&schema)?.trim_end().to_string()],
            SchemaFormat::Arrow => schema_to_arrow(&schema)
                .fields()
                .iter()
                .map(|field| {
                    let null = if field.is_nullable() { "" } else { " not null" };
                    format!("{}: {}{null}", field.name(), field.data_type())
                })
                .collect(),
        };
        if self.stats {
            lines.extend(schema.iter().map(|column| {
                format!(
                    "# {}: {} of {} values non-null",
                    column.name,
                    column.stats.non_null(),
                    column.stats.observed()
                )
            }));
        }
        emit(&lines.join("\n"), self.output.as_deref())
    }
}
