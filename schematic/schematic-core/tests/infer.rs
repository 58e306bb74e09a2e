use schematic_core::{
    InMemorySource, InferError, InferenceConfig, IntWidth, Row, RowSource, SourceError,
    TypeCandidate, format_schema, infer_schema, infer_schema_parallel,
};

fn orders() -> InMemorySource {
    InMemorySource::from_strs(
        &["id", "active", "amount"],
        &[&["1", "true", "10.50"], &["2", "false", "3"]],
    )
}

#[test]
fn infers_end_to_end_column_types() {
    let schema = infer_schema(&mut orders(), &InferenceConfig::default()).unwrap();

    assert_eq!(schema.column_names(), vec!["id", "active", "amount"]);
    assert!(matches!(
        schema.columns()[0].data_type,
        TypeCandidate::Integer {
            width: IntWidth::W8,
            ..
        }
    ));
    assert_eq!(schema.columns()[1].data_type, TypeCandidate::Boolean);
    assert_eq!(
        schema.columns()[2].data_type,
        TypeCandidate::Decimal {
            precision: 4,
            scale: 2
        }
    );
    assert!(schema.iter().all(|c| !c.nullable));
}

#[test]
fn malformed_row_aborts_the_pass() {
    let mut source = InMemorySource::from_strs(
        &["a", "b", "c"],
        &[&["1", "2", "3"], &["4", "5"], &["7", "8", "9"]],
    );
    let err = infer_schema(&mut source, &InferenceConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        InferError::MalformedRow {
            row: 2,
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn malformed_row_aborts_the_parallel_pass() {
    let mut source = InMemorySource::from_strs(&["a"], &[&["1"], &["2", "3"]]);
    let err = infer_schema_parallel(&mut source, &InferenceConfig::default(), 1).unwrap_err();
    assert!(matches!(err, InferError::MalformedRow { row: 2, .. }));
}

#[test]
fn malformed_row_past_sample_is_not_read() {
    let mut source = InMemorySource::from_strs(&["a", "b"], &[&["5", "x"], &["only one"]]);
    let config = InferenceConfig::builder().with_sample_size(Some(1)).build();
    let schema = infer_schema(&mut source, &config).unwrap();
    assert_eq!(schema.columns()[1].stats.observed(), 1);
}

#[test]
fn sample_size_bounds_rows_read() {
    let mut source = InMemorySource::from_strs(&["n"], &[&["5"], &["abc"]]);
    let config = InferenceConfig::builder().with_sample_size(Some(1)).build();
    let schema = infer_schema(&mut source, &config).unwrap();

    assert_eq!(
        schema.columns()[0].data_type,
        TypeCandidate::Integer {
            width: IntWidth::W8,
            digits: 1
        }
    );
}

#[test]
fn inference_is_idempotent() {
    let config = InferenceConfig::default();
    let first = infer_schema(&mut orders(), &config).unwrap();
    let second = infer_schema(&mut orders(), &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parallel_inference_matches_sequential() {
    let rows: &[&[&str]] = &[
        &["1", "2020-01-01", "", "a"],
        &["250", "2020-02-01", "1.25", "bb"],
        &["-3", "", "17", "ccc"],
        &["0", "2020-03-01", "NULL", ""],
        &["70000", "2020-04-01", "123.456", "dddd"],
    ];
    let header = ["n", "day", "price", "label"];
    let config = InferenceConfig::default();

    let sequential = infer_schema(&mut InMemorySource::from_strs(&header, rows), &config).unwrap();
    for batch_size in [1, 2, 3, 10] {
        let parallel = infer_schema_parallel(
            &mut InMemorySource::from_strs(&header, rows),
            &config,
            batch_size,
        )
        .unwrap();
        assert_eq!(parallel, sequential, "batch size {batch_size}");
    }

    assert_eq!(
        sequential.columns()[0].data_type,
        TypeCandidate::Integer {
            width: IntWidth::W32,
            digits: 5
        }
    );
    assert_eq!(sequential.columns()[1].data_type, TypeCandidate::Date);
    assert!(sequential.columns()[1].nullable);
    assert_eq!(
        sequential.columns()[2].data_type,
        TypeCandidate::Decimal {
            precision: 6,
            scale: 3
        }
    );
    assert_eq!(sequential.columns()[3].data_type, TypeCandidate::String(4));
    assert!(sequential.columns()[3].nullable);
}

#[test]
fn header_only_source_yields_nullable_empty_strings() {
    let mut source = InMemorySource::from_strs(&["a", "b"], &[]);
    let schema = infer_schema(&mut source, &InferenceConfig::default()).unwrap();
    for column in schema.iter() {
        assert_eq!(column.data_type, TypeCandidate::String(0));
        assert!(column.nullable);
    }
}

#[test]
fn duplicate_header_names_are_rejected() {
    let mut source = InMemorySource::from_strs(&["id", "ID"], &[&["1", "2"]]);
    let err = infer_schema(&mut source, &InferenceConfig::default()).unwrap_err();
    assert!(matches!(err, InferError::DuplicateColumn { name } if name == "ID"));
}

#[test]
fn non_ascii_names_fold_the_same_for_duplicates_and_lookup() {
    let mut source = InMemorySource::from_strs(&["Äpfel", "äpfel"], &[&["1", "2"]]);
    let err = infer_schema(&mut source, &InferenceConfig::default()).unwrap_err();
    assert!(matches!(err, InferError::DuplicateColumn { name } if name == "äpfel"));

    let mut source = InMemorySource::from_strs(&["Äpfel", "Größe"], &[&["1", "2"]]);
    let schema = infer_schema(&mut source, &InferenceConfig::default()).unwrap();
    assert_eq!(schema.column("äpfel").map(|c| c.name.as_str()), Some("Äpfel"));
    assert!(schema.column("GRÖSSE").is_none());
    assert_eq!(schema.column("größe").map(|c| c.name.as_str()), Some("Größe"));
}

#[test]
fn empty_header_is_rejected() {
    let mut source = InMemorySource::default();
    let err = infer_schema(&mut source, &InferenceConfig::default()).unwrap_err();
    assert!(matches!(err, InferError::EmptyHeader));
}

struct FailingSource {
    header: Vec<String>,
}

impl RowSource for FailingSource {
    fn header(&self) -> &[String] {
        &self.header
    }

    fn rows(&mut self) -> impl Iterator<Item = Result<Row, SourceError>> + '_ {
        let rows: [Result<Row, SourceError>; 2] =
            [Ok(vec!["1".to_string()]), Err("disk on fire".into())];
        rows.into_iter()
    }
}

#[test]
fn source_errors_carry_row_number() {
    let mut source = FailingSource {
        header: vec!["a".to_string()],
    };
    let err = infer_schema(&mut source, &InferenceConfig::default()).unwrap_err();
    match err {
        InferError::Source { row, source } => {
            assert_eq!(row, 2);
            assert_eq!(source.to_string(), "disk on fire");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn schema_lookup_ignores_case_and_formats_columns() {
    let schema = infer_schema(&mut orders(), &InferenceConfig::default()).unwrap();
    assert_eq!(schema.column("AMOUNT").map(|c| c.name.as_str()), Some("amount"));
    assert!(schema.column("missing").is_none());
    assert_eq!(
        format_schema(&schema).unwrap(),
        "id: { type: integer(8), nullable: false }\n\
         active: { type: boolean, nullable: false }\n\
         amount: { type: decimal(4,2), nullable: false }\n"
    );
    assert_eq!(schema.to_string(), format_schema(&schema).unwrap());
}
