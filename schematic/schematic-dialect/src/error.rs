use schematic_core::AbstractKind;
use thiserror::Error;

/// Configuration-level errors raised while mapping a schema onto a dialect.
#[derive(Debug, Error)]
pub enum MapError {
    /// The dialect has no type for a kind and no substitute is configured.
    #[error(
        "dialect '{dialect}' has no type for {kind} column '{column}' and no substitute is configured"
    )]
    UnsupportedKind {
        dialect: String,
        kind: AbstractKind,
        column: String,
    },

    /// A substitution targets a kind that cannot hold every value of the source kind.
    #[error("dialect '{dialect}' substitutes {from} with {to}, which is not more general")]
    InvalidSubstitution {
        dialect: String,
        from: AbstractKind,
        to: AbstractKind,
    },

    /// Following substitutions from `kind` leads back to a kind already visited.
    #[error("dialect '{dialect}' has a substitution cycle starting at {kind}")]
    SubstitutionCycle { dialect: String, kind: AbstractKind },

    #[error("unknown dialect '{name}' (known dialects: {known})")]
    UnknownDialect { name: String, known: String },

    /// A table option names a column the schema does not have.
    #[error("{option} references unknown column '{column}'")]
    UnknownColumn { option: &'static str, column: String },
}
