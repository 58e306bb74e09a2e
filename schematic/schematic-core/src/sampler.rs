//! Bounded, width-checked row sampling.

use crate::{
    error::InferError,
    source::{Row, SourceError},
};

/// Iterator adapter that yields at most `limit` rows from a row source and
/// rejects rows whose width differs from the header.
///
/// Row numbers in errors are 1-based and count data rows only.
pub struct Sampler<I> {
    rows: I,
    width: usize,
    limit: Option<usize>,
    taken: usize,
}

impl<I> Sampler<I>
where
    I: Iterator<Item = Result<Row, SourceError>>,
{
    pub fn new(rows: I, width: usize, limit: Option<usize>) -> Self {
        Self {
            rows,
            width,
            limit,
            taken: 0,
        }
    }

    /// Number of rows yielded so far, including a failing row.
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl<I> Iterator for Sampler<I>
where
    I: Iterator<Item = Result<Row, SourceError>>,
{
    type Item = Result<Row, InferError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.limit.is_some_and(|limit| self.taken >= limit) {
            return None;
        }

        let row = self.rows.next()?;
        self.taken += 1;

        Some(match row {
            Err(source) => Err(InferError::Source {
                row: self.taken,
                source,
            }),
            Ok(fields) if fields.len() != self.width => Err(InferError::MalformedRow {
                row: self.taken,
                expected: self.width,
                found: fields.len(),
            }),
            Ok(fields) => Ok(fields),
        })
    }
}
