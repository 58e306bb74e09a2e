use schematic::{
    Schematic,
    core::{InMemorySource, IntWidth, TypeCandidate},
    dialect::{Dialect, TableOptions},
};

#[test]
fn infer_accepts_any_row_source() {
    let mut source = InMemorySource::from_strs(&["n"], &[&["100000"], &["-5"]]);
    let schema = Schematic::new().infer(&mut source).unwrap();
    assert_eq!(
        schema.columns()[0].data_type,
        TypeCandidate::Integer {
            width: IntWidth::W32,
            digits: 6
        }
    );
}

#[test]
fn in_memory_rows_render_create_table() {
    let schematic = Schematic::builder()
        .with_dialect(Dialect::postgres())
        .build();
    let mut source = InMemorySource::from_strs(
        &["n", "placed"],
        &[
            &["100000", "2020-01-01T10:00:00+02:00"],
            &["-5", "2020-06-01T10:00:00Z"],
        ],
    );
    let schema = schematic.infer(&mut source).unwrap();
    let table = schematic
        .table_definition("events", &schema, TableOptions::default())
        .unwrap();

    assert_eq!(
        schematic.create_sql(&table),
        "CREATE TABLE events (\n    \
         n INTEGER NOT NULL,\n    \
         placed TIMESTAMPTZ NOT NULL\n\
         );"
    );
}
