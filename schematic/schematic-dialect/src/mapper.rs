//! Inferred column to concrete dialect type.

use std::cmp::Ordering;

use schematic_core::{AbstractKind, Column, IntWidth, Schema, TypeCandidate};
use tracing::{debug, warn};

use crate::{
    capability::{ConcreteType, DecimalType, IntegerType, StringType, TimestampType},
    caveat::{Caveat, CaveatKind},
    dialects::Dialect,
    error::MapError,
};

/// A schema column with its destination type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumn {
    pub name: String,
    pub data_type: ConcreteType,
    pub nullable: bool,
    /// Dialect-independent type the column was mapped from.
    pub inferred: TypeCandidate,
}

/// Every column of a schema mapped onto one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedSchema {
    pub columns: Vec<MappedColumn>,
    pub caveats: Vec<Caveat>,
}

/// Maps inferred columns onto a [`Dialect`]'s capability table.
///
/// Kinds without a native type follow the dialect's substitutions, which
/// must point to a strictly more general kind and must not loop. The value
/// is re-sized from the column's statistics at each step, so a boolean
/// column seen as `0`/`1` lands on the narrowest integer type.
#[derive(Debug, Clone, Copy)]
pub struct DialectMapper<'a> {
    dialect: &'a Dialect,
}

impl<'a> DialectMapper<'a> {
    pub fn new(dialect: &'a Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.dialect
    }

    pub fn map_schema(&self, schema: &Schema) -> Result<MappedSchema, MapError> {
        let mut columns = Vec::with_capacity(schema.len());
        let mut caveats = Vec::new();
        for column in schema.iter() {
            let (mapped, notices) = self.map_column(column)?;
            columns.push(mapped);
            caveats.extend(notices);
        }
        Ok(MappedSchema { columns, caveats })
    }

    pub fn map_column(&self, column: &Column) -> Result<(MappedColumn, Vec<Caveat>), MapError> {
        let mut caveats = Vec::new();
        let mut candidate = match column.data_type {
            TypeCandidate::Null => TypeCandidate::String(0),
            other => other,
        };
        let mut visited: Vec<AbstractKind> = Vec::new();

        let data_type = loop {
            let kind = candidate.kind().unwrap_or(AbstractKind::String);
            if let Some(concrete) = self.native(candidate, &column.name, &mut caveats) {
                break concrete;
            }

            let Some(to) = self.dialect.types.substitute_for(kind) else {
                return Err(MapError::UnsupportedKind {
                    dialect: self.dialect.name.clone(),
                    kind,
                    column: column.name.clone(),
                });
            };
            visited.push(kind);
            if visited.contains(&to) {
                return Err(MapError::SubstitutionCycle {
                    dialect: self.dialect.name.clone(),
                    kind: visited[0],
                });
            }
            if to.partial_cmp(&kind) != Some(Ordering::Greater) {
                return Err(MapError::InvalidSubstitution {
                    dialect: self.dialect.name.clone(),
                    from: kind,
                    to,
                });
            }

            debug!(column = %column.name, %kind, substitute = %to, "substituting");
            caveats.push(Caveat::new(
                &column.name,
                CaveatKind::Substituted { from: kind, to },
            ));
            candidate = column.stats.candidate_for(to);
        };

        for caveat in &caveats {
            warn!(dialect = %self.dialect.name, "{caveat}");
        }

        let mapped = MappedColumn {
            name: column.name.clone(),
            data_type,
            nullable: column.nullable,
            inferred: column.data_type,
        };
        Ok((mapped, caveats))
    }

    /// Concrete type for `candidate` if its kind is native to the dialect.
    fn native(
        &self,
        candidate: TypeCandidate,
        column: &str,
        caveats: &mut Vec<Caveat>,
    ) -> Option<ConcreteType> {
        let types = &self.dialect.types;
        match candidate {
            TypeCandidate::Null => self.native(TypeCandidate::String(0), column, caveats),
            TypeCandidate::Boolean => types.boolean.native().cloned(),
            TypeCandidate::Integer { width, .. } => types
                .integer
                .native()
                .and_then(|family| integer_type(family, width, column, caveats)),
            TypeCandidate::Decimal { precision, scale } => types
                .decimal
                .native()
                .map(|decimal| decimal_type(decimal, precision, scale, column, caveats)),
            TypeCandidate::Float => types.float.native().cloned(),
            TypeCandidate::Date => types.date.native().cloned(),
            TypeCandidate::Timestamp { zoned } => types
                .timestamp
                .native()
                .map(|timestamp| timestamp_type(timestamp, zoned, column, caveats)),
            TypeCandidate::String(length) => types
                .string
                .native()
                .map(|string| string_type(string, length, column, caveats)),
        }
    }
}

fn integer_type(
    family: &[IntegerType],
    width: IntWidth,
    column: &str,
    caveats: &mut Vec<Caveat>,
) -> Option<ConcreteType> {
    if let Some(fit) = family.iter().find(|t| t.max_width >= width) {
        return Some(fit.concrete.clone());
    }
    let widest = family.last()?;
    caveats.push(Caveat::new(
        column,
        CaveatKind::IntegerTooWide {
            bits: width.bits(),
            used: widest.concrete.to_string(),
        },
    ));
    Some(widest.concrete.clone())
}

fn timestamp_type(
    timestamp: &TimestampType,
    zoned: bool,
    column: &str,
    caveats: &mut Vec<Caveat>,
) -> ConcreteType {
    match (&timestamp.zoned, zoned) {
        (Some(zoned_type), true) => zoned_type.clone(),
        (None, true) => {
            caveats.push(Caveat::new(
                column,
                CaveatKind::OffsetDropped {
                    used: timestamp.naive.to_string(),
                },
            ));
            timestamp.naive.clone()
        }
        (_, false) => timestamp.naive.clone(),
    }
}

fn decimal_type(
    decimal: &DecimalType,
    precision: u32,
    scale: u32,
    column: &str,
    caveats: &mut Vec<Caveat>,
) -> ConcreteType {
    let (mut p, mut s) = (precision, scale);
    if p > decimal.max_precision {
        // Integer digits are kept; fractional digits absorb the cut.
        s = s.saturating_sub(p - decimal.max_precision);
        p = decimal.max_precision;
        caveats.push(Caveat::new(
            column,
            CaveatKind::PrecisionTruncated {
                precision,
                scale,
                max_precision: decimal.max_precision,
            },
        ));
    }
    if s > decimal.max_scale {
        caveats.push(Caveat::new(
            column,
            CaveatKind::ScaleTruncated {
                scale: s,
                max_scale: decimal.max_scale,
            },
        ));
        s = decimal.max_scale;
    }
    ConcreteType::with_params(&decimal.name, [u64::from(p), u64::from(s)])
}

fn string_type(
    string: &StringType,
    length: usize,
    column: &str,
    caveats: &mut Vec<Caveat>,
) -> ConcreteType {
    let length = length.max(1);
    if length <= string.max_length {
        return ConcreteType::with_params(&string.name, [length as u64]);
    }
    match &string.overflow {
        Some(overflow) => {
            caveats.push(Caveat::new(
                column,
                CaveatKind::LengthOverflow {
                    length,
                    max_length: string.max_length,
                    used: overflow.to_string(),
                },
            ));
            overflow.clone()
        }
        None => {
            caveats.push(Caveat::new(
                column,
                CaveatKind::LengthTruncated {
                    length,
                    max_length: string.max_length,
                },
            ));
            ConcreteType::with_params(&string.name, [string.max_length as u64])
        }
    }
}
