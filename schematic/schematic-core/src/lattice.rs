//! Running per-column type state and its lattice join.

use crate::{
    candidate::{AbstractKind, IntWidth, TypeCandidate},
    config::EmptyColumnPolicy,
};

/// Accumulated type evidence for one column.
///
/// Every field folded into a column is first lifted into a singleton
/// `ColumnType` with [`ColumnType::observe`]; singletons are combined with
/// [`ColumnType::merge`]. The merge is a join over
///
/// - the abstract kind (see [`AbstractKind`]'s partial order, Null at the bottom),
/// - max integer width, integer digits, scale and byte length,
/// - the nullable, "saw a textual boolean" and "saw a UTC offset" flags
///   (logical or),
/// - observation counters (sums),
///
/// so it is associative and commutative, and folding the same multiset of
/// fields in any order yields the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnType {
    kind: Option<AbstractKind>,
    nullable: bool,
    textual_boolean: bool,
    zoned: bool,
    int_width: Option<IntWidth>,
    int_digits: u32,
    scale: u32,
    max_length: usize,
    observed: usize,
    non_null: usize,
}

impl ColumnType {
    /// Column state before any field has been seen.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lift one field and its detected candidate into a column state.
    pub fn observe(field: &str, candidate: TypeCandidate) -> Self {
        let mut column = Self {
            kind: candidate.kind(),
            observed: 1,
            ..Self::default()
        };

        match candidate {
            TypeCandidate::Null => {
                column.nullable = true;
                return column;
            }
            TypeCandidate::Boolean => match field.parse::<i64>() {
                Ok(value) => {
                    column.int_width = Some(IntWidth::for_value(value));
                    column.int_digits = significant_digits(value);
                }
                Err(_) => column.textual_boolean = true,
            },
            TypeCandidate::Integer { width, digits } => {
                column.int_width = Some(width);
                column.int_digits = digits;
            }
            TypeCandidate::Decimal { precision, scale } => {
                column.int_digits = precision.saturating_sub(scale);
                column.scale = scale;
            }
            TypeCandidate::Timestamp { zoned } => column.zoned = zoned,
            TypeCandidate::Float | TypeCandidate::Date | TypeCandidate::String(_) => {}
        }

        column.non_null = 1;
        column.max_length = field.len();
        column
    }

    /// Least general column state covering both inputs.
    pub fn merge(&self, other: &ColumnType) -> ColumnType {
        let kind = match (self.kind, other.kind) {
            (Some(a), Some(b)) => Some(a.join(b)),
            (a, b) => a.or(b),
        };
        let textual_boolean = self.textual_boolean || other.textual_boolean;
        // `true` cannot be stored in a numeric column.
        let kind = kind.map(|k| {
            if textual_boolean && k.is_numeric() {
                AbstractKind::String
            } else {
                k
            }
        });

        ColumnType {
            kind,
            nullable: self.nullable || other.nullable,
            textual_boolean,
            zoned: self.zoned || other.zoned,
            int_width: self.int_width.max(other.int_width),
            int_digits: self.int_digits.max(other.int_digits),
            scale: self.scale.max(other.scale),
            max_length: self.max_length.max(other.max_length),
            observed: self.observed + other.observed,
            non_null: self.non_null + other.non_null,
        }
    }

    /// Fold one field into this column in place.
    pub fn fold(&mut self, field: &str, candidate: TypeCandidate) {
        *self = self.merge(&ColumnType::observe(field, candidate));
    }

    /// Current abstract kind; `None` while only nulls have been seen.
    pub fn kind(&self) -> Option<AbstractKind> {
        self.kind
    }

    /// True if a null was observed or no value was observed at all.
    pub fn is_nullable(&self) -> bool {
        self.nullable || self.kind.is_none()
    }

    /// True if any timestamp value carried a UTC offset.
    pub fn is_zoned(&self) -> bool {
        self.zoned
    }

    pub fn int_width(&self) -> Option<IntWidth> {
        self.int_width
    }

    pub fn int_digits(&self) -> u32 {
        self.int_digits
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Fixed-point precision covering every observed numeric value.
    pub fn precision(&self) -> u32 {
        (self.int_digits + self.scale).max(1)
    }

    /// Longest observed non-null value, in bytes.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn observed(&self) -> usize {
        self.observed
    }

    pub fn non_null(&self) -> usize {
        self.non_null
    }

    /// True if this state is at least as general as `earlier` on every axis.
    pub fn generalizes(&self, earlier: &ColumnType) -> bool {
        let kind_widened = match (earlier.kind, self.kind) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(before), Some(after)) => after >= before,
        };
        kind_widened
            && (self.nullable || !earlier.nullable)
            && (self.zoned || !earlier.zoned)
            && self.int_width >= earlier.int_width
            && self.int_digits >= earlier.int_digits
            && self.scale >= earlier.scale
            && self.max_length >= earlier.max_length
    }

    /// Candidate describing the whole column, with parameters taken from the
    /// accumulated maxima.
    pub fn resolve(&self, policy: EmptyColumnPolicy) -> TypeCandidate {
        match self.kind {
            Some(kind) => self.candidate_for(kind),
            None => match policy {
                EmptyColumnPolicy::String => TypeCandidate::String(0),
                EmptyColumnPolicy::As(kind) => self.candidate_for(kind),
            },
        }
    }

    /// Candidate of `kind` sized from the accumulated metadata.
    pub fn candidate_for(&self, kind: AbstractKind) -> TypeCandidate {
        match kind {
            AbstractKind::Boolean => TypeCandidate::Boolean,
            AbstractKind::Integer => TypeCandidate::Integer {
                width: self.int_width.unwrap_or(IntWidth::W8),
                digits: self.int_digits,
            },
            AbstractKind::Decimal => TypeCandidate::Decimal {
                precision: self.precision(),
                scale: self.scale,
            },
            AbstractKind::Float => TypeCandidate::Float,
            AbstractKind::Date => TypeCandidate::Date,
            AbstractKind::Timestamp => TypeCandidate::Timestamp { zoned: self.zoned },
            AbstractKind::String => TypeCandidate::String(self.max_length),
        }
    }
}

fn significant_digits(value: i64) -> u32 {
    match value.unsigned_abs() {
        0 => 0,
        v => v.ilog10() + 1,
    }
}
