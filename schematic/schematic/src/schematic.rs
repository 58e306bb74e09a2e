//! One-stop inference and rendering configuration.

use std::path::Path;

#[cfg(feature = "csv")]
use schematic_csv::{CsvOptions, CsvSource};
use schematic_core::{InferenceConfig, RowSource, Schema, infer_schema, infer_schema_parallel};
use schematic_dialect::{Dialect, TableDefinition, TableOptions};
use tracing::debug;
#[cfg(feature = "csv")]
use tracing::info;

use crate::error::SchematicError;

/// Infers schemas with one [`InferenceConfig`] and maps them onto one
/// [`Dialect`].
#[derive(Debug, Clone)]
pub struct Schematic {
    config: InferenceConfig,
    dialect: Dialect,
    parallel_batch: Option<usize>,
    #[cfg(feature = "csv")]
    csv: CsvOptions,
}

/// Builder for configuring [`Schematic`].
#[derive(Debug, Clone)]
pub struct SchematicBuilder {
    config: InferenceConfig,
    dialect: Dialect,
    parallel_batch: Option<usize>,
    #[cfg(feature = "csv")]
    csv: CsvOptions,
}

impl Schematic {
    /// Create a builder targeting Redshift with default inference settings.
    pub fn builder() -> SchematicBuilder {
        SchematicBuilder {
            config: InferenceConfig::default(),
            dialect: Dialect::redshift(),
            parallel_batch: None,
            #[cfg(feature = "csv")]
            csv: CsvOptions::default(),
        }
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Run one inference pass over `source`.
    pub fn infer<S: RowSource>(&self, source: &mut S) -> Result<Schema, SchematicError> {
        let schema = match self.parallel_batch {
            Some(batch_size) => infer_schema_parallel(source, &self.config, batch_size)?,
            None => infer_schema(source, &self.config)?,
        };
        Ok(schema)
    }

    /// Map `schema` onto the configured dialect as table `name`.
    pub fn table_definition(
        &self,
        name: &str,
        schema: &Schema,
        options: TableOptions,
    ) -> Result<TableDefinition, SchematicError> {
        let table = TableDefinition::from_schema(name, schema, &self.dialect, options)?;
        debug!(
            table = name,
            dialect = %self.dialect.name,
            caveats = table.caveats.len(),
            "mapped table definition"
        );
        Ok(table)
    }

    /// Render the `CREATE TABLE` statement for a table definition.
    pub fn create_sql(&self, table: &TableDefinition) -> String {
        table.create_sql(&self.dialect)
    }

    #[cfg(feature = "csv")]
    pub fn infer_csv(&self, path: &Path) -> Result<Schema, SchematicError> {
        let mut source = CsvSource::from_path(path, self.csv)?;
        let schema = self.infer(&mut source)?;
        info!(path = %path.display(), columns = schema.len(), "inferred schema");
        Ok(schema)
    }

    /// Infer a CSV file and map it onto the dialect. Without an explicit
    /// `table` name the file stem is used.
    #[cfg(feature = "csv")]
    pub fn table_from_csv(
        &self,
        path: &Path,
        table: Option<&str>,
        options: TableOptions,
    ) -> Result<TableDefinition, SchematicError> {
        let name = match table {
            Some(name) => name.to_string(),
            None => default_table_name(path).ok_or_else(|| SchematicError::InvalidTableName {
                path: path.to_path_buf(),
            })?,
        };
        let schema = self.infer_csv(path)?;
        self.table_definition(&name, &schema, options)
    }

    #[cfg(feature = "csv")]
    pub fn create_sql_from_csv(
        &self,
        path: &Path,
        table: Option<&str>,
        options: TableOptions,
    ) -> Result<String, SchematicError> {
        let table = self.table_from_csv(path, table, options)?;
        Ok(self.create_sql(&table))
    }
}

impl Default for Schematic {
    fn default() -> Self {
        Self::new()
    }
}

impl SchematicBuilder {
    pub fn with_config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Reduce the sample in parallel batches of `batch_size` rows.
    pub fn with_parallel_batch_size(mut self, batch_size: usize) -> Self {
        self.parallel_batch = Some(batch_size);
        self
    }

    #[cfg(feature = "csv")]
    pub fn with_csv_options(mut self, options: CsvOptions) -> Self {
        self.csv = options;
        self
    }

    pub fn build(self) -> Schematic {
        Schematic {
            config: self.config,
            dialect: self.dialect,
            parallel_batch: self.parallel_batch,
            #[cfg(feature = "csv")]
            csv: self.csv,
        }
    }
}

/// Table name derived from a file path: the file name without extension.
pub fn default_table_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}
