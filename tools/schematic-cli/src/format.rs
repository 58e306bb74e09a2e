use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SchemaFormat {
    /// One line per column with the abstract type
    Text,
    /// Arrow field types
    Arrow,
}
