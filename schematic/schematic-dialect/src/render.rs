//! Table definitions and `CREATE TABLE` rendering.

use schematic_core::{Schema, same_column_name};
use tracing::warn;

use crate::{
    caveat::{Caveat, CaveatKind},
    dialects::Dialect,
    error::MapError,
    identifier::IdentifierRules,
    mapper::{DialectMapper, MappedColumn},
};

/// Table-level options for the rendered statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Schema (namespace) the table is created in.
    pub schema: Option<String>,
    pub if_not_exists: bool,
    /// Distribution key column.
    pub distkey: Option<String>,
    /// Sort key columns, in order.
    pub sortkeys: Vec<String>,
}

impl TableOptions {
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_if_not_exists(mut self, if_not_exists: bool) -> Self {
        self.if_not_exists = if_not_exists;
        self
    }

    pub fn with_distkey(mut self, column: impl Into<String>) -> Self {
        self.distkey = Some(column.into());
        self
    }

    pub fn with_sortkeys<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sortkeys = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// A table ready to render for one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<MappedColumn>,
    pub options: TableOptions,
    /// Notices from type mapping and option handling, in column order
    /// followed by table-level notices.
    pub caveats: Vec<Caveat>,
}

impl TableDefinition {
    /// Map `schema` onto `dialect` and validate the table options.
    ///
    /// Key columns are matched case-insensitively and stored with the
    /// schema's spelling. Options the dialect cannot render are kept out of
    /// the statement and reported as caveats.
    pub fn from_schema(
        name: impl Into<String>,
        schema: &Schema,
        dialect: &Dialect,
        options: TableOptions,
    ) -> Result<Self, MapError> {
        let name = name.into();
        let mapped = DialectMapper::new(dialect).map_schema(schema)?;
        let mut caveats = mapped.caveats;

        let resolve = |option: &'static str, column: &str| {
            schema
                .column(column)
                .map(|c| c.name.clone())
                .ok_or_else(|| MapError::UnknownColumn {
                    option,
                    column: column.to_string(),
                })
        };
        let distkey = options
            .distkey
            .as_deref()
            .map(|column| resolve("DISTKEY", column))
            .transpose()?;
        let sortkeys = options
            .sortkeys
            .iter()
            .map(|column| resolve("SORTKEY", column))
            .collect::<Result<Vec<_>, _>>()?;
        let options = TableOptions {
            distkey,
            sortkeys,
            ..options
        };

        let mut table_notices = Vec::new();
        if options.if_not_exists && !dialect.features.if_not_exists {
            table_notices.push(CaveatKind::TableOptionIgnored {
                option: "IF NOT EXISTS",
            });
        }
        if !dialect.features.distribution_keys {
            if options.distkey.is_some() {
                table_notices.push(CaveatKind::TableOptionIgnored { option: "DISTKEY" });
            }
            if !options.sortkeys.is_empty() {
                table_notices.push(CaveatKind::TableOptionIgnored { option: "SORTKEY" });
            }
        }

        let rules = &dialect.identifiers;
        let identifiers = options
            .schema
            .iter()
            .chain(std::iter::once(&name))
            .chain(mapped.columns.iter().map(|c| &c.name));
        for identifier in identifiers {
            if let Some(notice) = length_notice(rules, identifier) {
                caveats.push(Caveat::new(identifier, notice));
            }
        }
        for notice in table_notices {
            warn!(dialect = %dialect.name, table = %name, "{notice}");
            caveats.push(Caveat::new(&name, notice));
        }

        Ok(Self {
            name,
            columns: mapped.columns,
            options,
            caveats,
        })
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&MappedColumn> {
        self.columns
            .iter()
            .find(|c| same_column_name(&c.name, name))
    }

    pub fn create_sql(&self, dialect: &Dialect) -> String {
        render_create_table(dialect, self)
    }
}

fn length_notice(rules: &IdentifierRules, identifier: &str) -> Option<CaveatKind> {
    let length = identifier.chars().count();
    (length > rules.max_length).then_some(CaveatKind::IdentifierTooLong {
        length,
        max_length: rules.max_length,
    })
}

/// Render `table` as a `CREATE TABLE` statement for `dialect`.
///
/// Column order follows the table. Options the dialect does not support are
/// left out.
pub fn render_create_table(dialect: &Dialect, table: &TableDefinition) -> String {
    let ids = &dialect.identifiers;
    let mut sql = String::from("CREATE TABLE ");
    if table.options.if_not_exists && dialect.features.if_not_exists {
        sql.push_str("IF NOT EXISTS ");
    }
    if let Some(schema) = &table.options.schema {
        sql.push_str(&ids.quote(schema));
        sql.push('.');
    }
    sql.push_str(&ids.quote(&table.name));
    sql.push_str(" (\n");

    let definitions: Vec<String> = table
        .columns
        .iter()
        .map(|column| {
            let null = if column.nullable { "NULL" } else { "NOT NULL" };
            format!("    {} {} {null}", ids.quote(&column.name), column.data_type)
        })
        .collect();
    sql.push_str(&definitions.join(",\n"));
    sql.push_str("\n)");

    if dialect.features.distribution_keys {
        if let Some(distkey) = &table.options.distkey {
            sql.push_str(&format!("\nDISTKEY ({})", ids.quote(distkey)));
        }
        if !table.options.sortkeys.is_empty() {
            let keys: Vec<String> = table.options.sortkeys.iter().map(|k| ids.quote(k)).collect();
            sql.push_str(&format!("\nSORTKEY ({})", keys.join(", ")));
        }
    }
    sql.push(';');
    sql
}
