//! Row source contract consumed by the sampler.

/// One ordered row of raw field strings.
pub type Row = Vec<String>;

/// Error reported by a [`RowSource`] implementation while reading a row.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// A finite, single-pass supplier of rows with a header naming the columns.
///
/// Implementations are not required to check row widths; the
/// [`Sampler`](crate::Sampler) does that.
pub trait RowSource {
    /// Column names in source order.
    fn header(&self) -> &[String];

    /// Remaining data rows. Rows already yielded are not produced again.
    fn rows(&mut self) -> impl Iterator<Item = Result<Row, SourceError>> + '_;
}

/// [`RowSource`] over rows already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl InMemorySource {
    pub fn new(header: Vec<String>, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// Build a source from string slices.
    pub fn from_strs(header: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }
}

impl RowSource for InMemorySource {
    fn header(&self) -> &[String] {
        &self.header
    }

    fn rows(&mut self) -> impl Iterator<Item = Result<Row, SourceError>> + '_ {
        std::mem::take(&mut self.rows).into_iter().map(Ok)
    }
}
