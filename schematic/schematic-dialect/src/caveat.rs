//! Non-fatal notices attached to a mapped schema.

use std::fmt::{Display, Formatter, Result};

use schematic_core::AbstractKind;

/// A value-level approximation made while mapping or rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caveat {
    /// Column, table or schema name the notice is about.
    pub subject: String,
    pub kind: CaveatKind,
}

impl Caveat {
    pub fn new(subject: impl Into<String>, kind: CaveatKind) -> Self {
        Self {
            subject: subject.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaveatKind {
    Substituted {
        from: AbstractKind,
        to: AbstractKind,
    },
    PrecisionTruncated {
        precision: u32,
        scale: u32,
        max_precision: u32,
    },
    ScaleTruncated {
        scale: u32,
        max_scale: u32,
    },
    LengthTruncated {
        length: usize,
        max_length: usize,
    },
    LengthOverflow {
        length: usize,
        max_length: usize,
        used: String,
    },
    IntegerTooWide {
        bits: u32,
        used: String,
    },
    IdentifierTooLong {
        length: usize,
        max_length: usize,
    },
    OffsetDropped {
        used: String,
    },
    TableOptionIgnored {
        option: &'static str,
    },
}

impl Display for CaveatKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CaveatKind::Substituted { from, to } => {
                write!(f, "{from} is not supported, stored as {to}")
            }
            CaveatKind::PrecisionTruncated {
                precision,
                scale,
                max_precision,
            } => write!(
                f,
                "decimal({precision},{scale}) exceeds maximum precision {max_precision}; fractional digits dropped"
            ),
            CaveatKind::ScaleTruncated { scale, max_scale } => {
                write!(f, "decimal scale {scale} exceeds maximum scale {max_scale}")
            }
            CaveatKind::LengthTruncated { length, max_length } => write!(
                f,
                "values up to {length} bytes exceed maximum length {max_length}; longer values will not fit"
            ),
            CaveatKind::LengthOverflow {
                length,
                max_length,
                used,
            } => write!(
                f,
                "values up to {length} bytes exceed maximum length {max_length}; using {used}"
            ),
            CaveatKind::IntegerTooWide { bits, used } => {
                write!(f, "no integer type holds {bits}-bit values; using {used}")
            }
            CaveatKind::IdentifierTooLong { length, max_length } => write!(
                f,
                "identifier has {length} characters, limit is {max_length}"
            ),
            CaveatKind::OffsetDropped { used } => {
                write!(f, "UTC offsets are not stored; using {used}")
            }
            CaveatKind::TableOptionIgnored { option } => {
                write!(f, "{option} is not supported and was omitted")
            }
        }
    }
}

impl Display for Caveat {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}: {}", self.subject, self.kind)
    }
}
