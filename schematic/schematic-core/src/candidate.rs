//! Per-field type candidates and the abstract kind lattice.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result},
    str::FromStr,
};

/// Signed integer storage width, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    /// Smallest width that can hold `value`.
    pub fn for_value(value: i64) -> Self {
        if i8::try_from(value).is_ok() {
            IntWidth::W8
        } else if i16::try_from(value).is_ok() {
            IntWidth::W16
        } else if i32::try_from(value).is_ok() {
            IntWidth::W32
        } else {
            IntWidth::W64
        }
    }
}

/// Dialect-independent type classification.
///
/// Generality forms a partial order:
/// `Boolean < Integer < Decimal < Float < String`, `Date < String` and
/// `Timestamp < String`. `Date` and `Timestamp` are incomparable with the
/// numeric chain and with each other, so [`PartialOrd::partial_cmp`] returns
/// `None` for those pairs. Null is not a kind; it is the bottom of the
/// lattice and is represented as `Option::<AbstractKind>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbstractKind {
    Boolean,
    Integer,
    Decimal,
    Float,
    Date,
    Timestamp,
    String,
}

impl AbstractKind {
    pub const ALL: [AbstractKind; 7] = [
        AbstractKind::Boolean,
        AbstractKind::Integer,
        AbstractKind::Decimal,
        AbstractKind::Float,
        AbstractKind::Date,
        AbstractKind::Timestamp,
        AbstractKind::String,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AbstractKind::Boolean => "boolean",
            AbstractKind::Integer => "integer",
            AbstractKind::Decimal => "decimal",
            AbstractKind::Float => "float",
            AbstractKind::Date => "date",
            AbstractKind::Timestamp => "timestamp",
            AbstractKind::String => "string",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            AbstractKind::Integer | AbstractKind::Decimal | AbstractKind::Float
        )
    }

    fn numeric_rank(self) -> Option<u8> {
        match self {
            AbstractKind::Boolean => Some(0),
            AbstractKind::Integer => Some(1),
            AbstractKind::Decimal => Some(2),
            AbstractKind::Float => Some(3),
            _ => None,
        }
    }

    /// Least general kind that is at least as general as both inputs.
    pub fn join(self, other: AbstractKind) -> AbstractKind {
        match self.partial_cmp(&other) {
            Some(Ordering::Less | Ordering::Equal) => other,
            Some(Ordering::Greater) => self,
            None => AbstractKind::String,
        }
    }
}

impl PartialOrd for AbstractKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match (self, other) {
            (AbstractKind::String, _) => Some(Ordering::Greater),
            (_, AbstractKind::String) => Some(Ordering::Less),
            _ => match (self.numeric_rank(), other.numeric_rank()) {
                (Some(a), Some(b)) => Some(a.cmp(&b)),
                _ => None,
            },
        }
    }
}

impl Display for AbstractKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

impl FromStr for AbstractKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AbstractKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown type kind '{s}'"))
    }
}

/// Classification of a single raw field, produced by the
/// [`Detector`](crate::Detector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCandidate {
    Null,
    Boolean,
    /// `digits` counts significant integer digits (leading zeros excluded).
    Integer {
        width: IntWidth,
        digits: u32,
    },
    /// `precision` counts significant digits and is 0 for a zero written
    /// without fraction digits, such as `0.`.
    Decimal {
        precision: u32,
        scale: u32,
    },
    Float,
    Date,
    /// `zoned` is set when the value carried a UTC offset or `Z` designator.
    Timestamp {
        zoned: bool,
    },
    /// Byte length of the value.
    String(usize),
}

impl TypeCandidate {
    /// Abstract kind of this candidate, `None` for [`TypeCandidate::Null`].
    pub fn kind(&self) -> Option<AbstractKind> {
        match self {
            TypeCandidate::Null => None,
            TypeCandidate::Boolean => Some(AbstractKind::Boolean),
            TypeCandidate::Integer { .. } => Some(AbstractKind::Integer),
            TypeCandidate::Decimal { .. } => Some(AbstractKind::Decimal),
            TypeCandidate::Float => Some(AbstractKind::Float),
            TypeCandidate::Date => Some(AbstractKind::Date),
            TypeCandidate::Timestamp { .. } => Some(AbstractKind::Timestamp),
            TypeCandidate::String(_) => Some(AbstractKind::String),
        }
    }
}

impl Display for TypeCandidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TypeCandidate::Null => f.write_str("null"),
            TypeCandidate::Integer { width, .. } => write!(f, "integer({})", width.bits()),
            TypeCandidate::Decimal { precision, scale } => {
                write!(f, "decimal({precision},{scale})")
            }
            TypeCandidate::Timestamp { zoned: true } => f.write_str("timestamptz"),
            TypeCandidate::String(len) => write!(f, "string({len})"),
            other => match other.kind() {
                Some(kind) => f.write_str(kind.name()),
                None => f.write_str("null"),
            },
        }
    }
}
