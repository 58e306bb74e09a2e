use schematic_core::{
    AbstractKind, InMemorySource, InferenceConfig, Schema, TypeCandidate, infer_schema,
};
use schematic_dialect::{
    CaveatKind, ConcreteType, Dialect, DialectMapper, IntegerType, KindCapability, MapError,
    TimestampType,
};

fn schema(header: &[&str], rows: &[&[&str]]) -> Schema {
    schema_with(header, rows, &InferenceConfig::default())
}

fn schema_with(header: &[&str], rows: &[&[&str]], config: &InferenceConfig) -> Schema {
    infer_schema(&mut InMemorySource::from_strs(header, rows), config).unwrap()
}

fn orders() -> Schema {
    schema(
        &["id", "active", "amount"],
        &[
            &["1", "true", "12.50"],
            &["2", "false", "3.75"],
            &["3", "true", "0.5"],
        ],
    )
}

fn types(dialect: &Dialect, schema: &Schema) -> Vec<String> {
    DialectMapper::new(dialect)
        .map_schema(schema)
        .unwrap()
        .columns
        .iter()
        .map(|c| c.data_type.to_string())
        .collect()
}

#[test]
fn concrete_type_display() {
    assert_eq!(ConcreteType::named("DATE").to_string(), "DATE");
    assert_eq!(
        ConcreteType::with_params("DECIMAL", [4, 2]).to_string(),
        "DECIMAL(4,2)"
    );
    assert_eq!(
        ConcreteType::with_params("VARCHAR", [10]).to_string(),
        "VARCHAR(10)"
    );
}

#[test]
fn redshift_maps_native_kinds() {
    let schema = schema(
        &["id", "active", "amount", "ratio", "day", "at", "name"],
        &[&[
            "300",
            "true",
            "12.50",
            "1e10",
            "2024-01-31",
            "2024-01-31 10:00:00",
            "alice",
        ]],
    );
    assert_eq!(
        types(&Dialect::redshift(), &schema),
        vec![
            "SMALLINT",
            "BOOLEAN",
            "DECIMAL(4,2)",
            "DOUBLE PRECISION",
            "DATE",
            "TIMESTAMP",
            "VARCHAR(5)",
        ]
    );
}

#[test]
fn redshift_picks_narrowest_integer_type() {
    let schema = schema(
        &["small", "medium", "large"],
        &[&["12", "100000", "5000000000"]],
    );
    assert_eq!(
        types(&Dialect::redshift(), &schema),
        vec!["SMALLINT", "INTEGER", "BIGINT"]
    );
}

#[test]
fn oracle_substitutes_boolean_with_smallest_integer() {
    let dialect = Dialect::oracle();
    let mapped = DialectMapper::new(&dialect).map_schema(&orders()).unwrap();

    let rendered: Vec<String> = mapped
        .columns
        .iter()
        .map(|c| c.data_type.to_string())
        .collect();
    assert_eq!(rendered, vec!["NUMBER(3)", "NUMBER(3)", "NUMBER(4,2)"]);
    assert_eq!(mapped.columns[1].inferred, TypeCandidate::Boolean);

    assert_eq!(mapped.caveats.len(), 1);
    assert_eq!(mapped.caveats[0].subject, "active");
    assert_eq!(
        mapped.caveats[0].kind,
        CaveatKind::Substituted {
            from: AbstractKind::Boolean,
            to: AbstractKind::Integer
        }
    );
}

#[test]
fn empty_column_maps_to_shortest_nullable_string() {
    let schema = schema(&["id", "note"], &[&["1", ""], &["2", "NULL"]]);
    let dialect = Dialect::redshift();
    let mapped = DialectMapper::new(&dialect).map_schema(&schema).unwrap();

    assert_eq!(mapped.columns[1].data_type.to_string(), "VARCHAR(1)");
    assert!(mapped.columns[1].nullable);
    assert!(mapped.caveats.is_empty());
}

#[test]
fn long_strings_clamp_without_overflow_type() {
    let long = "x".repeat(70_000);
    let schema = schema(&["body"], &[&[long.as_str()]]);
    let dialect = Dialect::redshift();
    let mapped = DialectMapper::new(&dialect).map_schema(&schema).unwrap();

    assert_eq!(mapped.columns[0].data_type.to_string(), "VARCHAR(65535)");
    assert_eq!(
        mapped.caveats[0].kind,
        CaveatKind::LengthTruncated {
            length: 70_000,
            max_length: 65535
        }
    );
}

#[test]
fn long_strings_use_overflow_type() {
    let long = "x".repeat(5_000);
    let schema = schema(&["body"], &[&[long.as_str()]]);

    let postgres = Dialect::postgres();
    let mapped = DialectMapper::new(&postgres).map_schema(&schema).unwrap();
    assert_eq!(mapped.columns[0].data_type.to_string(), "VARCHAR(5000)");
    assert!(mapped.caveats.is_empty());

    let oracle = Dialect::oracle();
    let mapped = DialectMapper::new(&oracle).map_schema(&schema).unwrap();
    assert_eq!(mapped.columns[0].data_type.to_string(), "CLOB");
    assert_eq!(
        mapped.caveats[0].kind,
        CaveatKind::LengthOverflow {
            length: 5_000,
            max_length: 4000,
            used: "CLOB".into()
        }
    );
}

#[test]
fn decimal_precision_beyond_dialect_maximum_is_truncated() {
    let config = InferenceConfig::builder()
        .with_max_decimal_precision(50)
        .build();
    let value = format!("{}.{}", "1".repeat(30), "2".repeat(15));
    let schema = schema_with(&["big"], &[&[value.as_str()]], &config);
    assert_eq!(
        schema.columns()[0].data_type,
        TypeCandidate::Decimal {
            precision: 45,
            scale: 15
        }
    );

    let dialect = Dialect::redshift();
    let mapped = DialectMapper::new(&dialect).map_schema(&schema).unwrap();
    assert_eq!(mapped.columns[0].data_type.to_string(), "DECIMAL(38,8)");
    assert_eq!(
        mapped.caveats[0].kind,
        CaveatKind::PrecisionTruncated {
            precision: 45,
            scale: 15,
            max_precision: 38
        }
    );
}

#[test]
fn decimal_scale_beyond_dialect_maximum_is_clamped() {
    let value = format!("0.{}", "1".repeat(38));
    let schema = schema(&["tiny"], &[&[value.as_str()]]);
    let dialect = Dialect::redshift();
    let mapped = DialectMapper::new(&dialect).map_schema(&schema).unwrap();

    assert_eq!(mapped.columns[0].data_type.to_string(), "DECIMAL(38,37)");
    assert_eq!(
        mapped.caveats[0].kind,
        CaveatKind::ScaleTruncated {
            scale: 38,
            max_scale: 37
        }
    );
}

#[test]
fn integer_wider_than_family_uses_widest_type() {
    let mut dialect = Dialect::redshift();
    dialect.types.integer = KindCapability::Native(vec![IntegerType::new(
        schematic_core::IntWidth::W16,
        ConcreteType::named("SMALLINT"),
    )]);
    let schema = schema(&["n"], &[&["100000"]]);
    let mapped = DialectMapper::new(&dialect).map_schema(&schema).unwrap();

    assert_eq!(mapped.columns[0].data_type.to_string(), "SMALLINT");
    assert_eq!(
        mapped.caveats[0].kind,
        CaveatKind::IntegerTooWide {
            bits: 32,
            used: "SMALLINT".into()
        }
    );
}

#[test]
fn offset_timestamps_map_to_zoned_types() {
    let schema = schema(
        &["at", "local"],
        &[
            &["2020-01-01T10:00:00+02:00", "2020-01-01 10:00:00"],
            &["2020-06-01T10:00:00-05:00", "2020-06-01 10:00:00"],
        ],
    );
    assert_eq!(
        schema.columns()[0].data_type,
        TypeCandidate::Timestamp { zoned: true }
    );

    let expected = [
        (Dialect::redshift(), "TIMESTAMPTZ"),
        (Dialect::postgres(), "TIMESTAMPTZ"),
        (Dialect::oracle(), "TIMESTAMP WITH TIME ZONE"),
    ];
    for (dialect, zoned) in expected {
        let mapped = DialectMapper::new(&dialect).map_schema(&schema).unwrap();
        assert_eq!(mapped.columns[0].data_type.to_string(), zoned);
        assert_eq!(mapped.columns[1].data_type.to_string(), "TIMESTAMP");
        assert!(mapped.caveats.is_empty(), "{}", dialect.name);
    }
}

#[test]
fn offsets_without_zoned_type_raise_caveat() {
    let mut dialect = Dialect::postgres();
    dialect.types.timestamp =
        KindCapability::Native(TimestampType::new(ConcreteType::named("TIMESTAMP"), None));
    let schema = schema(&["at"], &[&["2020-01-01T10:00:00Z"]]);
    let mapped = DialectMapper::new(&dialect).map_schema(&schema).unwrap();

    assert_eq!(mapped.columns[0].data_type.to_string(), "TIMESTAMP");
    assert_eq!(
        mapped.caveats[0].kind,
        CaveatKind::OffsetDropped {
            used: "TIMESTAMP".into()
        }
    );
    assert_eq!(
        mapped.caveats[0].to_string(),
        "at: UTC offsets are not stored; using TIMESTAMP"
    );
}

#[test]
fn substitution_to_string_resizes_from_observed_length() {
    let mut dialect = Dialect::redshift();
    dialect.types.date = KindCapability::Substitute(AbstractKind::String);
    let schema = schema(&["day"], &[&["2024-01-31"], &["2024-02-01"]]);

    assert_eq!(types(&dialect, &schema), vec!["VARCHAR(10)"]);
}

#[test]
fn unsupported_kind_is_a_configuration_error() {
    let mut dialect = Dialect::redshift();
    dialect.types.date = KindCapability::Unsupported;
    let schema = schema(&["day"], &[&["2024-01-31"]]);

    let err = DialectMapper::new(&dialect).map_schema(&schema).unwrap_err();
    assert!(matches!(
        err,
        MapError::UnsupportedKind {
            kind: AbstractKind::Date,
            ref column,
            ..
        } if column == "day"
    ));
}

#[test]
fn substitution_must_generalize() {
    let mut dialect = Dialect::redshift();
    dialect.types.date = KindCapability::Substitute(AbstractKind::Integer);
    let schema = schema(&["day"], &[&["2024-01-31"]]);

    let err = DialectMapper::new(&dialect).map_schema(&schema).unwrap_err();
    assert!(matches!(
        err,
        MapError::InvalidSubstitution {
            from: AbstractKind::Date,
            to: AbstractKind::Integer,
            ..
        }
    ));
}

#[test]
fn substitution_cycles_are_rejected() {
    let mut dialect = Dialect::redshift();
    dialect.types.boolean = KindCapability::Substitute(AbstractKind::Integer);
    dialect.types.integer = KindCapability::Substitute(AbstractKind::Boolean);
    let schema = schema(&["flag"], &[&["true"]]);

    let err = DialectMapper::new(&dialect).map_schema(&schema).unwrap_err();
    assert!(matches!(
        err,
        MapError::SubstitutionCycle {
            kind: AbstractKind::Boolean,
            ..
        }
    ));
}

#[test]
fn builtin_lookup_is_case_insensitive() {
    assert_eq!(Dialect::by_name("Redshift").unwrap().name, "redshift");
    assert_eq!(Dialect::by_name("PostgreSQL").unwrap().name, "postgres");
    assert_eq!(Dialect::by_name("pg").unwrap().name, "postgres");
    assert_eq!(Dialect::builtin().len(), Dialect::BUILTIN_NAMES.len());

    let err = Dialect::by_name("mysql").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown dialect 'mysql' (known dialects: redshift, postgres, oracle)"
    );
}

#[test]
fn builtin_tables_cover_every_kind() {
    for dialect in Dialect::builtin() {
        for kind in AbstractKind::ALL {
            let native = dialect.types.is_native(kind);
            let substituted = dialect.types.substitute_for(kind).is_some();
            assert!(native || substituted, "{} lacks {kind}", dialect.name);
        }
    }
}
