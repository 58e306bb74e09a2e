//! Built-in warehouse dialects.

use schematic_core::{AbstractKind, IntWidth};

use crate::{
    capability::{
        CapabilityTable, ConcreteType, DecimalType, IntegerType, KindCapability, StringType,
        TimestampType,
    },
    error::MapError,
    identifier::{CaseFolding, IdentifierRules},
};

/// Optional statement features a dialect can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialectFeatures {
    /// `CREATE TABLE IF NOT EXISTS`.
    pub if_not_exists: bool,
    /// Redshift style `DISTKEY` / `SORTKEY` table attributes.
    pub distribution_keys: bool,
}

/// A destination warehouse: its type capabilities, identifier rules and
/// supported statement features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    pub name: String,
    pub types: CapabilityTable,
    pub identifiers: IdentifierRules,
    pub features: DialectFeatures,
}

impl Dialect {
    pub const BUILTIN_NAMES: [&'static str; 3] = ["redshift", "postgres", "oracle"];

    pub fn builtin() -> Vec<Dialect> {
        vec![Dialect::redshift(), Dialect::postgres(), Dialect::oracle()]
    }

    /// Look up a built-in dialect, ignoring case. `postgresql` and `pg` are
    /// accepted for Postgres.
    pub fn by_name(name: &str) -> Result<Dialect, MapError> {
        match name.to_ascii_lowercase().as_str() {
            "redshift" => Ok(Dialect::redshift()),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::postgres()),
            "oracle" => Ok(Dialect::oracle()),
            _ => Err(MapError::UnknownDialect {
                name: name.to_string(),
                known: Dialect::BUILTIN_NAMES.join(", "),
            }),
        }
    }

    pub fn redshift() -> Dialect {
        Dialect {
            name: "redshift".into(),
            types: CapabilityTable {
                boolean: KindCapability::Native(ConcreteType::named("BOOLEAN")),
                integer: KindCapability::Native(vec![
                    IntegerType::new(IntWidth::W16, ConcreteType::named("SMALLINT")),
                    IntegerType::new(IntWidth::W32, ConcreteType::named("INTEGER")),
                    IntegerType::new(IntWidth::W64, ConcreteType::named("BIGINT")),
                ]),
                decimal: KindCapability::Native(DecimalType {
                    name: "DECIMAL".into(),
                    max_precision: 38,
                    max_scale: 37,
                }),
                float: KindCapability::Native(ConcreteType::named("DOUBLE PRECISION")),
                date: KindCapability::Native(ConcreteType::named("DATE")),
                timestamp: KindCapability::Native(TimestampType::new(
                    ConcreteType::named("TIMESTAMP"),
                    Some(ConcreteType::named("TIMESTAMPTZ")),
                )),
                string: KindCapability::Native(StringType {
                    name: "VARCHAR".into(),
                    max_length: 65535,
                    overflow: None,
                }),
            },
            identifiers: IdentifierRules {
                open_quote: '"',
                close_quote: '"',
                folding: CaseFolding::Lower,
                max_length: 127,
                reserved: words(REDSHIFT_RESERVED),
            },
            features: DialectFeatures {
                if_not_exists: true,
                distribution_keys: true,
            },
        }
    }

    pub fn postgres() -> Dialect {
        Dialect {
            name: "postgres".into(),
            types: CapabilityTable {
                boolean: KindCapability::Native(ConcreteType::named("BOOLEAN")),
                integer: KindCapability::Native(vec![
                    IntegerType::new(IntWidth::W16, ConcreteType::named("SMALLINT")),
                    IntegerType::new(IntWidth::W32, ConcreteType::named("INTEGER")),
                    IntegerType::new(IntWidth::W64, ConcreteType::named("BIGINT")),
                ]),
                decimal: KindCapability::Native(DecimalType {
                    name: "NUMERIC".into(),
                    max_precision: 1000,
                    max_scale: 1000,
                }),
                float: KindCapability::Native(ConcreteType::named("DOUBLE PRECISION")),
                date: KindCapability::Native(ConcreteType::named("DATE")),
                timestamp: KindCapability::Native(TimestampType::new(
                    ConcreteType::named("TIMESTAMP"),
                    Some(ConcreteType::named("TIMESTAMPTZ")),
                )),
                string: KindCapability::Native(StringType {
                    name: "VARCHAR".into(),
                    max_length: 10_485_760,
                    overflow: Some(ConcreteType::named("TEXT")),
                }),
            },
            identifiers: IdentifierRules {
                open_quote: '"',
                close_quote: '"',
                folding: CaseFolding::Lower,
                max_length: 63,
                reserved: words(POSTGRES_RESERVED),
            },
            features: DialectFeatures {
                if_not_exists: true,
                distribution_keys: false,
            },
        }
    }

    /// Oracle has no boolean column type; booleans are stored as the
    /// narrowest `NUMBER` integer.
    pub fn oracle() -> Dialect {
        Dialect {
            name: "oracle".into(),
            types: CapabilityTable {
                boolean: KindCapability::Substitute(AbstractKind::Integer),
                integer: KindCapability::Native(vec![
                    IntegerType::new(IntWidth::W8, ConcreteType::with_params("NUMBER", [3])),
                    IntegerType::new(IntWidth::W16, ConcreteType::with_params("NUMBER", [5])),
                    IntegerType::new(IntWidth::W32, ConcreteType::with_params("NUMBER", [10])),
                    IntegerType::new(IntWidth::W64, ConcreteType::with_params("NUMBER", [19])),
                ]),
                decimal: KindCapability::Native(DecimalType {
                    name: "NUMBER".into(),
                    max_precision: 38,
                    max_scale: 127,
                }),
                float: KindCapability::Native(ConcreteType::named("BINARY_DOUBLE")),
                date: KindCapability::Native(ConcreteType::named("DATE")),
                timestamp: KindCapability::Native(TimestampType::new(
                    ConcreteType::named("TIMESTAMP"),
                    Some(ConcreteType::named("TIMESTAMP WITH TIME ZONE")),
                )),
                string: KindCapability::Native(StringType {
                    name: "VARCHAR2".into(),
                    max_length: 4000,
                    overflow: Some(ConcreteType::named("CLOB")),
                }),
            },
            identifiers: IdentifierRules {
                open_quote: '"',
                close_quote: '"',
                folding: CaseFolding::Upper,
                max_length: 128,
                reserved: words(ORACLE_RESERVED),
            },
            features: DialectFeatures::default(),
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

const REDSHIFT_RESERVED: &[&str] = &[
    "AES128", "AES256", "ALL", "ALLOWOVERWRITE", "ANALYSE", "ANALYZE", "AND", "ANY", "ARRAY",
    "AS", "ASC", "AUTHORIZATION", "AZ64", "BACKUP", "BETWEEN", "BINARY", "BLANKSASNULL", "BOTH",
    "BYTEDICT", "BZIP2", "CASE", "CAST", "CHECK", "COLLATE", "COLUMN", "CONSTRAINT", "CREATE",
    "CREDENTIALS", "CROSS", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
    "CURRENT_USER_ID", "DEFAULT", "DEFERRABLE", "DEFLATE", "DEFRAG", "DELTA", "DELTA32K", "DESC",
    "DISABLE", "DISTINCT", "DO", "ELSE", "EMPTYASNULL", "ENABLE", "ENCODE", "ENCRYPT",
    "ENCRYPTION", "END", "EXCEPT", "EXPLICIT", "FALSE", "FOR", "FOREIGN", "FREEZE", "FROM",
    "FULL", "GLOBALDICT256", "GLOBALDICT64K", "GRANT", "GROUP", "GZIP", "HAVING", "IDENTITY",
    "IGNORE", "ILIKE", "IN", "INITIALLY", "INNER", "INTERSECT", "INTERVAL", "INTO", "IS",
    "ISNULL", "JOIN", "LANGUAGE", "LEADING", "LEFT", "LIKE", "LIMIT", "LOCALTIME",
    "LOCALTIMESTAMP", "LUN", "LUNS", "LZO", "LZOP", "MINUS", "MOSTLY16", "MOSTLY32", "MOSTLY8",
    "NATURAL", "NEW", "NOT", "NOTNULL", "NULL", "NULLS", "OFF", "OFFLINE", "OFFSET", "OID",
    "OLD", "ON", "ONLY", "OPEN", "OR", "ORDER", "OUTER", "OVERLAPS", "PARALLEL", "PARTITION",
    "PERCENT", "PERMISSIONS", "PIVOT", "PLACING", "PRIMARY", "RAW", "READRATIO", "RECOVER",
    "REFERENCES", "REJECTLOG", "RESORT", "RESPECT", "RESTORE", "RIGHT", "SELECT",
    "SESSION_USER", "SIMILAR", "SNAPSHOT", "SOME", "SYSDATE", "SYSTEM", "TABLE", "TAG", "TDES",
    "TEXT255", "TEXT32K", "THEN", "TIMESTAMP", "TO", "TOP", "TRAILING", "TRUE",
    "TRUNCATECOLUMNS", "UNION", "UNIQUE", "UNNEST", "UNPIVOT", "USER", "USING", "VERBOSE",
    "WALLET", "WHEN", "WHERE", "WITH", "WITHOUT",
];

const POSTGRES_RESERVED: &[&str] = &[
    "ALL", "ANALYSE", "ANALYZE", "AND", "ANY", "ARRAY", "AS", "ASC", "ASYMMETRIC",
    "AUTHORIZATION", "BINARY", "BOTH", "CASE", "CAST", "CHECK", "COLLATE", "COLLATION", "COLUMN",
    "CONCURRENTLY", "CONSTRAINT", "CREATE", "CROSS", "CURRENT_CATALOG", "CURRENT_DATE",
    "CURRENT_ROLE", "CURRENT_SCHEMA", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
    "DEFAULT", "DEFERRABLE", "DESC", "DISTINCT", "DO", "ELSE", "END", "EXCEPT", "FALSE", "FETCH",
    "FOR", "FOREIGN", "FREEZE", "FROM", "FULL", "GRANT", "GROUP", "HAVING", "ILIKE", "IN",
    "INITIALLY", "INNER", "INTERSECT", "INTO", "IS", "ISNULL", "JOIN", "LATERAL", "LEADING",
    "LEFT", "LIKE", "LIMIT", "LOCALTIME", "LOCALTIMESTAMP", "NATURAL", "NOT", "NOTNULL", "NULL",
    "OFFSET", "ON", "ONLY", "OR", "ORDER", "OUTER", "OVERLAPS", "PLACING", "PRIMARY",
    "REFERENCES", "RETURNING", "RIGHT", "SELECT", "SESSION_USER", "SIMILAR", "SOME", "SYMMETRIC",
    "SYSTEM_USER", "TABLE", "TABLESAMPLE", "THEN", "TO", "TRAILING", "TRUE", "UNION", "UNIQUE",
    "USER", "USING", "VARIADIC", "VERBOSE", "WHEN", "WHERE", "WINDOW", "WITH",
];

const ORACLE_RESERVED: &[&str] = &[
    "ACCESS", "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "AUDIT", "BETWEEN", "BY", "CHAR",
    "CHECK", "CLUSTER", "COLUMN", "COMMENT", "COMPRESS", "CONNECT", "CREATE", "CURRENT", "DATE",
    "DECIMAL", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "EXCLUSIVE", "EXISTS",
    "FILE", "FLOAT", "FOR", "FROM", "GRANT", "GROUP", "HAVING", "IDENTIFIED", "IMMEDIATE", "IN",
    "INCREMENT", "INDEX", "INITIAL", "INSERT", "INTEGER", "INTERSECT", "INTO", "IS", "LEVEL",
    "LIKE", "LOCK", "LONG", "MAXEXTENTS", "MINUS", "MLSLABEL", "MODE", "MODIFY", "NOAUDIT",
    "NOCOMPRESS", "NOT", "NOWAIT", "NULL", "NUMBER", "OF", "OFFLINE", "ON", "ONLINE", "OPTION",
    "OR", "ORDER", "PCTFREE", "PRIOR", "PUBLIC", "RAW", "RENAME", "RESOURCE", "REVOKE", "ROW",
    "ROWID", "ROWNUM", "ROWS", "SELECT", "SESSION", "SET", "SHARE", "SIZE", "SMALLINT", "START",
    "SUCCESSFUL", "SYNONYM", "SYSDATE", "TABLE", "THEN", "TO", "TRIGGER", "UID", "UNION",
    "UNIQUE", "UPDATE", "USER", "VALIDATE", "VALUES", "VARCHAR", "VARCHAR2", "VIEW", "WHENEVER",
    "WHERE", "WITH",
];
