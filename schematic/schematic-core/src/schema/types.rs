use std::fmt::{Display, Formatter, Result};

use crate::{
    candidate::TypeCandidate, config::EmptyColumnPolicy, error::InferError, lattice::ColumnType,
};

/// One inferred column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    /// Resolved column-level type; never [`TypeCandidate::Null`].
    pub data_type: TypeCandidate,
    pub nullable: bool,
    /// Evidence the type was resolved from.
    pub stats: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, stats: ColumnType, policy: EmptyColumnPolicy) -> Self {
        Self {
            name: name.into(),
            data_type: stats.resolve(policy),
            nullable: stats.is_nullable(),
            stats,
        }
    }
}

/// Ordered inferred columns, one per source column.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Build a schema, rejecting an empty column list and names that collide
    /// case-insensitively.
    pub fn new(columns: Vec<Column>) -> std::result::Result<Self, InferError> {
        if columns.is_empty() {
            return Err(InferError::EmptyHeader);
        }
        validate_names(columns.iter().map(|c| c.name.as_str()))?;
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by name, ignoring case.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| same_column_name(&c.name, name))
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_schema(self)?;
        f.write_str(&text)
    }
}

/// Case-folded form under which two column names collide.
pub fn fold_column_name(name: &str) -> String {
    name.to_lowercase()
}

/// Whether `a` and `b` name the same column.
pub fn same_column_name(a: &str, b: &str) -> bool {
    a == b || fold_column_name(a) == fold_column_name(b)
}

pub(crate) fn validate_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> std::result::Result<(), InferError> {
    let mut seen: Vec<String> = Vec::new();
    for name in names {
        let folded = fold_column_name(name);
        if seen.contains(&folded) {
            return Err(InferError::DuplicateColumn {
                name: name.to_string(),
            });
        }
        seen.push(folded);
    }
    Ok(())
}
