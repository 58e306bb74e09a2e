use std::{fs::File, io::Read, path::Path};

use schematic_core::{Row, RowSource, SourceError};
use tracing::debug;

use crate::error::CsvSourceError;

/// Dialect of the delimited input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub quote: u8,
    /// Trim surrounding whitespace from headers and fields.
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            trim: false,
        }
    }
}

impl CsvOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

/// Streams records of a delimited file as rows of raw field strings.
pub struct CsvSource<R> {
    header: Vec<String>,
    reader: csv::Reader<R>,
}

impl CsvSource<File> {
    pub fn from_path(path: impl AsRef<Path>, options: CsvOptions) -> Result<Self, CsvSourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CsvSourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened csv source");
        Self::from_reader(file, options)
    }
}

impl<R: Read> CsvSource<R> {
    /// Wrap `reader` and read its header record.
    pub fn from_reader(reader: R, options: CsvOptions) -> Result<Self, CsvSourceError> {
        let trim = if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        };
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .trim(trim)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let header = reader.headers()?.iter().map(str::to_string).collect();
        Ok(Self { header, reader })
    }
}

impl<R: Read> RowSource for CsvSource<R> {
    fn header(&self) -> &[String] {
        &self.header
    }

    fn rows(&mut self) -> impl Iterator<Item = Result<Row, SourceError>> + '_ {
        self.reader.records().map(|record| match record {
            Ok(record) => Ok(record.iter().map(str::to_string).collect()),
            Err(err) => Err(Box::new(CsvSourceError::from(err)) as SourceError),
        })
    }
}
