//! Inference pass drivers.

use rayon::prelude::*;
use tracing::debug;

use crate::{
    config::InferenceConfig,
    detector::Detector,
    error::InferError,
    sampler::Sampler,
    schema::{Schema, validate_names},
    source::{Row, RowSource},
    unifier::Unifier,
};

/// Infer a schema by folding sampled rows in source order.
///
/// Any source or row-shape error aborts the pass and discards all partial
/// column state.
pub fn infer_schema<S: RowSource>(
    source: &mut S,
    config: &InferenceConfig,
) -> Result<Schema, InferError> {
    let header = checked_header(source)?;
    let detector = Detector::new(config);
    let mut unifier = Unifier::new(header.len());

    let mut rows = Sampler::new(source.rows(), header.len(), config.sample_size);
    for row in rows.by_ref() {
        unifier.observe_row(&row?, &detector);
    }

    debug!(
        rows = rows.taken(),
        columns = header.len(),
        "inference pass complete"
    );
    unifier.finish(&header, config.empty_column)
}

/// Infer a schema by reducing batches of `batch_size` rows in parallel.
///
/// The sample is read sequentially first; unification runs only once every
/// row has passed the shape check. The result equals [`infer_schema`] on the
/// same input.
pub fn infer_schema_parallel<S: RowSource>(
    source: &mut S,
    config: &InferenceConfig,
    batch_size: usize,
) -> Result<Schema, InferError> {
    let header = checked_header(source)?;
    let width = header.len();
    let rows = Sampler::new(source.rows(), width, config.sample_size)
        .collect::<Result<Vec<Row>, InferError>>()?;

    let detector = Detector::new(config);
    let unifier = rows
        .par_chunks(batch_size.max(1))
        .map(|batch| {
            let mut local = Unifier::new(width);
            for row in batch {
                local.observe_row(row, &detector);
            }
            local
        })
        .reduce(|| Unifier::new(width), Unifier::merge);

    debug!(
        rows = rows.len(),
        columns = width,
        batch_size,
        "parallel inference pass complete"
    );
    unifier.finish(&header, config.empty_column)
}

fn checked_header<S: RowSource>(source: &S) -> Result<Vec<String>, InferError> {
    let header = source.header().to_vec();
    if header.is_empty() {
        return Err(InferError::EmptyHeader);
    }
    validate_names(header.iter().map(String::as_str))?;
    Ok(header)
}
