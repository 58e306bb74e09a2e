use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use schematic::dialect::{Dialect, TableOptions};

use super::{InferenceArgs, emit};

#[derive(Args)]
pub struct CreateSqlArgs {
    /// Path to the CSV file
    input: PathBuf,

    /// Target dialect (see `schematic dialects`)
    #[arg(short, long, default_value = "redshift")]
    dialect: String,

    /// Table name (default: the file name without extension)
    #[arg(short, long)]
    table: Option<String>,

    /// Schema the table is created in
    #[arg(long)]
    schema: Option<String>,

    /// Emit CREATE TABLE IF NOT EXISTS
    #[arg(long)]
    if_not_exists: bool,

    /// Distribution key column
    #[arg(long)]
    distkey: Option<String>,

    /// Sort key column; repeat for a compound key
    #[arg(long = "sortkey")]
    sortkeys: Vec<String>,

    #[command(flatten)]
    inference: InferenceArgs,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CreateSqlArgs {
    pub fn run(self) -> Result<()> {
        let dialect = Dialect::by_name(&self.dialect)?;
        let schematic = self.inference.builder()?.with_dialect(dialect).build();

        let mut options = TableOptions::default()
            .with_if_not_exists(self.if_not_exists)
            .with_sortkeys(self.sortkeys);
        if let Some(schema) = self.schema {
            options = options.with_schema(schema);
        }
        if let Some(distkey) = self.distkey {
            options = options.with_distkey(distkey);
        }

        let table = schematic.table_from_csv(&self.input, self.table.as_deref(), options)?;
        for caveat in &table.caveats {
            eprintln!("warning: {caveat}");
        }
        emit(&schematic.create_sql(&table), self.output.as_deref())
    }
}
