//! Dialect capability tables: abstract kind to concrete type.

use std::fmt::{Display, Formatter, Result};

use schematic_core::{AbstractKind, IntWidth};

/// A destination column type such as `BIGINT` or `DECIMAL(4,2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteType {
    pub name: String,
    pub params: Vec<u64>,
}

impl ConcreteType {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn with_params(name: impl Into<String>, params: impl IntoIterator<Item = u64>) -> Self {
        Self {
            name: name.into(),
            params: params.into_iter().collect(),
        }
    }
}

impl Display for ConcreteType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.name)?;
        if !self.params.is_empty() {
            let params: Vec<String> = self.params.iter().map(u64::to_string).collect();
            write!(f, "({})", params.join(","))?;
        }
        Ok(())
    }
}

/// How a dialect stores one abstract kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindCapability<T> {
    /// The dialect has a native type family for the kind.
    Native(T),
    /// The kind is stored as another, more general kind.
    Substitute(AbstractKind),
    /// The kind cannot be stored; mapping a column of this kind fails.
    Unsupported,
}

impl<T> KindCapability<T> {
    pub fn native(&self) -> Option<&T> {
        match self {
            KindCapability::Native(native) => Some(native),
            _ => None,
        }
    }

    pub fn substitute(&self) -> Option<AbstractKind> {
        match self {
            KindCapability::Substitute(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// One member of an integer type family, holding values up to `max_width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerType {
    pub max_width: IntWidth,
    pub concrete: ConcreteType,
}

impl IntegerType {
    pub fn new(max_width: IntWidth, concrete: ConcreteType) -> Self {
        Self {
            max_width,
            concrete,
        }
    }
}

/// Fixed-point type rendered as `name(precision,scale)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalType {
    pub name: String,
    pub max_precision: u32,
    pub max_scale: u32,
}

/// Variable-length string type rendered as `name(length)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringType {
    pub name: String,
    /// Longest length the parameterized type accepts.
    pub max_length: usize,
    /// Unbounded type used when values exceed `max_length`. Without one the
    /// length is clamped.
    pub overflow: Option<ConcreteType>,
}

/// Timestamp types with and without a stored UTC offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampType {
    pub naive: ConcreteType,
    /// Offset-aware type; without one, zoned columns use `naive` and lose
    /// their offsets.
    pub zoned: Option<ConcreteType>,
}

impl TimestampType {
    pub fn new(naive: ConcreteType, zoned: Option<ConcreteType>) -> Self {
        Self { naive, zoned }
    }
}

/// Static mapping from every abstract kind to a dialect's storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityTable {
    pub boolean: KindCapability<ConcreteType>,
    /// Integer family ordered from narrowest to widest.
    pub integer: KindCapability<Vec<IntegerType>>,
    pub decimal: KindCapability<DecimalType>,
    pub float: KindCapability<ConcreteType>,
    pub date: KindCapability<ConcreteType>,
    pub timestamp: KindCapability<TimestampType>,
    pub string: KindCapability<StringType>,
}

impl CapabilityTable {
    /// Configured substitute for `kind`, if the kind is substituted.
    pub fn substitute_for(&self, kind: AbstractKind) -> Option<AbstractKind> {
        match kind {
            AbstractKind::Boolean => self.boolean.substitute(),
            AbstractKind::Integer => self.integer.substitute(),
            AbstractKind::Decimal => self.decimal.substitute(),
            AbstractKind::Float => self.float.substitute(),
            AbstractKind::Date => self.date.substitute(),
            AbstractKind::Timestamp => self.timestamp.substitute(),
            AbstractKind::String => self.string.substitute(),
        }
    }

    pub fn is_native(&self, kind: AbstractKind) -> bool {
        match kind {
            AbstractKind::Boolean => self.boolean.native().is_some(),
            AbstractKind::Integer => self.integer.native().is_some_and(|f| !f.is_empty()),
            AbstractKind::Decimal => self.decimal.native().is_some(),
            AbstractKind::Float => self.float.native().is_some(),
            AbstractKind::Date => self.date.native().is_some(),
            AbstractKind::Timestamp => self.timestamp.native().is_some(),
            AbstractKind::String => self.string.native().is_some(),
        }
    }
}
