use arrow::datatypes::{
    DECIMAL128_MAX_PRECISION, DECIMAL256_MAX_PRECISION, DataType, Field, Schema, TimeUnit,
};
use schematic_core::{Column, IntWidth, TypeCandidate};

/// Converts an inferred schema into an Arrow `Schema`, preserving column
/// order and nullability.
pub fn schema_to_arrow(schema: &schematic_core::Schema) -> Schema {
    let fields: Vec<Field> = schema.iter().map(column_to_arrow_field).collect();
    Schema::new(fields)
}

fn column_to_arrow_field(column: &Column) -> Field {
    Field::new(
        &column.name,
        candidate_to_arrow_type(&column.data_type),
        column.nullable,
    )
}

/// Arrow type able to hold every value of `candidate`.
///
/// Decimals wider than `Decimal256` fall back to `Float64`; Arrow has no
/// length-limited string, so every string maps to `Utf8`. Timestamps that
/// carried an offset are normalized to UTC.
pub fn candidate_to_arrow_type(candidate: &TypeCandidate) -> DataType {
    match *candidate {
        TypeCandidate::Null => DataType::Null,
        TypeCandidate::Boolean => DataType::Boolean,
        TypeCandidate::Integer { width, .. } => match width {
            IntWidth::W8 => DataType::Int8,
            IntWidth::W16 => DataType::Int16,
            IntWidth::W32 => DataType::Int32,
            IntWidth::W64 => DataType::Int64,
        },
        TypeCandidate::Decimal { precision, scale } => decimal_type(precision, scale),
        TypeCandidate::Float => DataType::Float64,
        TypeCandidate::Date => DataType::Date32,
        TypeCandidate::Timestamp { zoned: false } => {
            DataType::Timestamp(TimeUnit::Nanosecond, None)
        }
        TypeCandidate::Timestamp { zoned: true } => {
            DataType::Timestamp(TimeUnit::Nanosecond, Some("UTC".into()))
        }
        TypeCandidate::String(_) => DataType::Utf8,
    }
}

fn decimal_type(precision: u32, scale: u32) -> DataType {
    let (Ok(p), Ok(s)) = (u8::try_from(precision), i8::try_from(scale)) else {
        return DataType::Float64;
    };
    if p <= DECIMAL128_MAX_PRECISION {
        DataType::Decimal128(p, s)
    } else if p <= DECIMAL256_MAX_PRECISION {
        DataType::Decimal256(p, s)
    } else {
        DataType::Float64
    }
}
