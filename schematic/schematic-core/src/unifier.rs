//! Folding detected candidates into per-column types.

use tracing::debug;

use crate::{
    config::EmptyColumnPolicy,
    detector::Detector,
    error::InferError,
    lattice::ColumnType,
    schema::{Column, Schema},
};

/// Running [`ColumnType`] for every column of a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unifier {
    columns: Vec<ColumnType>,
}

impl Unifier {
    pub fn new(width: usize) -> Self {
        Self {
            columns: vec![ColumnType::empty(); width],
        }
    }

    /// Classify every field of `row` and fold it into its column.
    ///
    /// `row` must have exactly one field per column; the
    /// [`Sampler`](crate::Sampler) guarantees this.
    pub fn observe_row<S: AsRef<str>>(&mut self, row: &[S], detector: &Detector<'_>) {
        for (index, (column, field)) in self.columns.iter_mut().zip(row).enumerate() {
            let field = field.as_ref();
            let before = column.kind();
            column.fold(field, detector.detect(field));
            if column.kind() != before {
                debug!(column = index, from = ?before, to = ?column.kind(), "column widened");
            }
        }
    }

    /// Combine two partial reductions over disjoint row sets.
    pub fn merge(self, other: Unifier) -> Unifier {
        let columns = self
            .columns
            .iter()
            .zip(&other.columns)
            .map(|(a, b)| a.merge(b))
            .collect();
        Unifier { columns }
    }

    pub fn columns(&self) -> &[ColumnType] {
        &self.columns
    }

    /// Freeze the running types into a [`Schema`] named by `header`.
    pub fn finish(self, header: &[String], policy: EmptyColumnPolicy) -> Result<Schema, InferError> {
        let columns = header
            .iter()
            .zip(self.columns)
            .map(|(name, stats)| Column::new(name.clone(), stats, policy))
            .collect();
        Schema::new(columns)
    }
}
